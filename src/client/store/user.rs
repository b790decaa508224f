use coparent::model::user::UserDto;

/// Signed-in user shared through context
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserState {
    pub user: Option<UserDto>,
    /// Set once the user request has completed, signed in or not
    pub fetched: bool,
}
