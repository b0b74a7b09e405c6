//! Signup and login.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{CreateUserParams, LoginParams, SignupParams, User},
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new user with an Argon2id password hash.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::BadRequest)` - Email or phone already registered
    /// - `Err(AppError::AuthErr(PasswordHash))` - Hashing failed
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn signup(&self, params: SignupParams) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        if repo.email_exists(&params.email).await? {
            return Err(AppError::BadRequest("User already exists".to_string()));
        }
        if repo.phone_exists(&params.phone).await? {
            return Err(AppError::BadRequest("Phone is already in use".to_string()));
        }

        let password_hash = hash_password(&params.password)?;

        let user = repo
            .create(CreateUserParams {
                first_name: params.first_name,
                last_name: params.last_name,
                email: params.email,
                phone: params.phone,
                password_hash,
            })
            .await?;

        tracing::info!(user_id = %user.id, "Registered user");

        Ok(user)
    }

    /// Checks an email and password pair.
    ///
    /// # Returns
    /// - `Ok(User)` - Credentials match
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Unknown email or wrong password
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn login(&self, params: LoginParams) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        let Some((user, password_hash)) = repo.find_credentials_by_email(&params.email).await?
        else {
            return Err(AuthError::InvalidCredentials.into());
        };

        verify_password(&params.password, &password_hash)?;

        Ok(user)
    }
}

fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AuthError::PasswordHash(e.to_string()))
}

fn verify_password(password: &str, password_hash: &str) -> Result<(), AuthError> {
    let parsed = PasswordHash::new(password_hash).map_err(|_| AuthError::InvalidCredentials)?;

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .map_err(|_| AuthError::InvalidCredentials)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{builder::TestBuilder, factory::user::UserFactory};

    fn signup(email: &str, phone: &str) -> SignupParams {
        SignupParams {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            password: "secret123".to_string(),
        }
    }

    /// Tests signing up and logging in with the same credentials.
    ///
    /// Expected: login returns the registered user; the stored hash is not the password
    #[tokio::test]
    async fn signs_up_and_logs_in() -> Result<(), AppError> {
        let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let service = UserService::new(db);
        let user = service.signup(signup("jane@example.com", "555-0100")).await?;

        let (_, hash) = UserRepository::new(db)
            .find_credentials_by_email("jane@example.com")
            .await?
            .unwrap();
        assert_ne!(hash, "secret123");

        let logged_in = service
            .login(LoginParams {
                email: "jane@example.com".to_string(),
                password: "secret123".to_string(),
            })
            .await?;
        assert_eq!(logged_in.id, user.id);

        Ok(())
    }

    /// Tests that a wrong password or unknown email fails the same way.
    ///
    /// Expected: Err(AuthErr(InvalidCredentials)) for both
    #[tokio::test]
    async fn rejects_bad_credentials() -> Result<(), AppError> {
        let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let service = UserService::new(db);
        service.signup(signup("jane@example.com", "555-0100")).await?;

        for (email, password) in [
            ("jane@example.com", "wrong-password"),
            ("nobody@example.com", "secret123"),
        ] {
            let result = service
                .login(LoginParams {
                    email: email.to_string(),
                    password: password.to_string(),
                })
                .await;
            assert!(matches!(
                result,
                Err(AppError::AuthErr(AuthError::InvalidCredentials))
            ));
        }

        Ok(())
    }

    /// Tests duplicate email and phone detection.
    ///
    /// Expected: BadRequest with the duplicate-specific message
    #[tokio::test]
    async fn rejects_duplicate_email_and_phone() -> Result<(), AppError> {
        let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        UserFactory::new(db)
            .email("taken@example.com")
            .phone("555-0199")
            .build()
            .await?;
        let service = UserService::new(db);

        let result = service.signup(signup("taken@example.com", "555-0100")).await;
        assert!(matches!(result, Err(AppError::BadRequest(msg)) if msg == "User already exists"));

        let result = service.signup(signup("free@example.com", "555-0199")).await;
        assert!(matches!(result, Err(AppError::BadRequest(msg)) if msg == "Phone is already in use"));

        Ok(())
    }
}
