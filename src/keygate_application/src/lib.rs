pub mod authorize;
pub mod error;
pub mod use_cases;

#[cfg(test)]
pub(crate) mod test_doubles;

pub use authorize::TokenAuthorizer;
pub use error::AuthError;
pub use use_cases::{
    get_profile::GetProfileUseCase, login::LoginUseCase, refresh_token::RefreshTokenUseCase,
    register::RegisterUseCase, update_profile::UpdateProfileUseCase,
};
