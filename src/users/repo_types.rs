/// Fields accepted for a new row, all non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub password: String, // stored as given, no hashing
    pub email: String,
}

/// A row as it exists after the insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub user_id: u64, // AUTO_INCREMENT key
    pub username: String,
    pub password: String,
    pub email: String,
}

impl User {
    pub fn from_new(user_id: u64, new_user: &NewUser) -> Self {
        Self {
            user_id,
            username: new_user.username.clone(),
            password: new_user.password.clone(),
            email: new_user.email.clone(),
        }
    }
}
