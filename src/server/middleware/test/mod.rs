use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::{auth::AuthGuard, session::AuthSession},
};
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

/// Tests that a logged-in user is resolved.
///
/// Expected: Ok(User) matching the session's user
#[tokio::test]
async fn resolves_logged_in_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_shop_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::create_user(db).await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let resolved = AuthGuard::new(db, session).require().await?;

    assert_eq!(resolved.id, user.id);
    assert_eq!(resolved.email, user.email);

    Ok(())
}

/// Tests that an empty session is rejected.
///
/// Expected: Err(AuthErr(UserNotInSession))
#[tokio::test]
async fn rejects_anonymous_session() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_shop_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let result = AuthGuard::new(db, session).require().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}

/// Tests that a session naming a deleted or unknown user is rejected.
///
/// Expected: Err(AuthErr(UserNotInDatabase))
#[tokio::test]
async fn rejects_unknown_session_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_shop_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let unknown = Uuid::new_v4();
    AuthSession::new(session).set_user_id(unknown).await?;

    let result = AuthGuard::new(db, session).require().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(id))) if id == unknown
    ));

    Ok(())
}

/// Tests that flushing the session logs the user out.
///
/// Expected: Err(AuthErr(UserNotInSession)) after flush
#[tokio::test]
async fn flush_logs_out() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_shop_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::create_user(db).await?;
    let auth_session = AuthSession::new(session);
    auth_session.set_user_id(user.id).await?;
    auth_session.flush().await?;

    assert!(auth_session.get_user_id().await?.is_none());
    assert!(matches!(
        AuthGuard::new(db, session).require().await,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}
