use supply_chain::auth::CredentialProvider;
use supply_chain::config::Config;
use supply_chain::forms::{FormMessage, SignUpForm, SIGN_UP_FAILED, SIGN_UP_SUCCEEDED};
use supply_chain::lifecycle::SupplyChainSystem;
use supply_chain::model::{DocumentId, Profile, Role};
use supply_chain::routing::{navigate, DashboardId, Route, View};

fn sign_up_form(email: &str, role: Role) -> SignUpForm {
    SignUpForm {
        name: "Asha".into(),
        email: email.into(),
        phone: "555-0100".into(),
        password: "harvest-2024".into(),
        user_type: Some(role),
    }
}

/// Sign up as a farmer, land on the farmer dashboard, sign out.
#[tokio::test]
async fn test_sign_up_dispatches_to_the_role_dashboard() {
    let system = SupplyChainSystem::start(&Config::default());
    let initial = system.session.resolved().await;
    assert_eq!(navigate("/", &initial), View::SignIn);

    let outcome = system
        .forms()
        .sign_up(sign_up_form("asha@farm.test", Role::Farmer))
        .await;
    assert_eq!(
        outcome.message,
        Some(FormMessage::Success(SIGN_UP_SUCCEEDED.into()))
    );
    assert_eq!(outcome.redirect, Some(Route::Home));

    let session = system.session.snapshot();
    let identity = session.identity.clone().expect("Signed in after sign-up");
    assert_eq!(session.role(), Some(Role::Farmer));
    assert_eq!(session.name.as_deref(), Some("Asha"));
    assert_eq!(navigate("/", &session), View::Dashboard(DashboardId::Farmer));

    let profile = system
        .profiles
        .find(&identity.uid)
        .await
        .unwrap()
        .expect("Profile stored under the identity id");
    assert_eq!(profile.user_type, "Farmer");
    assert_eq!(profile.email, "asha@farm.test");
    assert_eq!(profile.phone, "555-0100");

    let outcome = system.forms().log_out().await;
    assert_eq!(outcome.redirect, Some(Route::Login));
    let session = system.session.refresh().await.unwrap();
    assert_eq!(session.identity, None);
    assert_eq!(navigate("/", &session), View::SignIn);
    assert_eq!(navigate("/farmer", &session), View::SignIn);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_sign_in_again_restores_the_role() {
    let system = SupplyChainSystem::start(&Config::default());
    system.session.resolved().await;
    let forms = system.forms();

    forms
        .sign_up(sign_up_form("mill@town.test", Role::Manufacturer))
        .await;
    forms.log_out().await;

    let outcome = forms.sign_in("mill@town.test", "harvest-2024").await;
    assert!(!outcome.is_error());
    let session = system.session.refresh().await.unwrap();
    assert_eq!(
        navigate("/", &session),
        View::Dashboard(DashboardId::Manufacturer)
    );

    let duplicate = forms
        .sign_up(sign_up_form("mill@town.test", Role::Trader))
        .await;
    assert_eq!(
        duplicate.message,
        Some(FormMessage::Error(SIGN_UP_FAILED.into()))
    );

    drop(forms);
    system.shutdown().await.unwrap();
}

/// An identity whose profile is not written yet shows loading, never the
/// unknown-role view; a stored tag outside the role set is terminal.
#[tokio::test]
async fn test_profile_resolution_edges() {
    let system = SupplyChainSystem::start(&Config::default());
    system.session.resolved().await;

    let identity = system
        .provider
        .sign_up("late@farm.test", "harvest-2024")
        .await
        .unwrap();
    let session = system.session.refresh().await.unwrap();
    assert!(session.awaiting_profile());
    assert_eq!(navigate("/", &session), View::Loading);

    system
        .profiles
        .save(Profile {
            id: DocumentId::from(identity.uid.as_str()),
            name: "Late".into(),
            email: identity.email.clone(),
            phone: String::new(),
            user_type: "Wholesaler".into(),
        })
        .await
        .unwrap();
    let session = system.session.refresh().await.unwrap();
    assert_eq!(navigate("/", &session), View::UnknownRole);
    assert_eq!(navigate("/", &session), View::UnknownRole);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_password_reset_messages() {
    let system = SupplyChainSystem::start(&Config::default());
    let forms = system.forms();
    forms
        .sign_up(sign_up_form("shop@town.test", Role::Shops))
        .await;

    let sent = forms.forgot_password("shop@town.test").await;
    assert!(matches!(sent.message, Some(FormMessage::Success(_))));
    let failed = forms.forgot_password("ghost@town.test").await;
    assert!(failed.is_error());
    assert_eq!(system.provider.reset_requests(), vec!["shop@town.test"]);

    drop(forms);
    system.shutdown().await.unwrap();
}
