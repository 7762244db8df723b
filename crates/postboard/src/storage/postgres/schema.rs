//! PostgreSQL schema and SQL query constants.
//!
//! All SQL used by the user store lives here as pure data, testable
//! without a database.

/// SQL statement to create the users table.
pub const CREATE_USERS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id SERIAL PRIMARY KEY,
    name VARCHAR(50),
    email VARCHAR(50),
    reposts INT DEFAULT 0
)
"#;

pub const SELECT_USERS: &str = r#"
SELECT id, name, email, reposts
FROM users
ORDER BY id
"#;

pub const INSERT_USER: &str = r#"
INSERT INTO users (name, email, reposts)
VALUES ($1, $2, 0)
RETURNING id, name, email, reposts
"#;

pub const UPDATE_USER: &str = r#"
UPDATE users
SET name = $2, email = $3
WHERE id = $1
RETURNING id, name, email, reposts
"#;

/// Increment runs inside the database so concurrent bumps never lose an
/// update. COALESCE covers rows that predate the DEFAULT.
pub const INCREMENT_REPOSTS: &str = r#"
UPDATE users
SET reposts = COALESCE(reposts, 0) + 1
WHERE id = $1
RETURNING id, name, email, reposts
"#;
