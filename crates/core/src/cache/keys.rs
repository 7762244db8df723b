/// Cache key under which the full posts listing is stored.
///
/// Every post mutation that commits invalidates this key; failed
/// mutations leave it untouched.
pub const POSTS_LISTING: &str = "posts-listing";
