//! # Mock Clients
//!
//! `MockClient<T>` hands out a real [`ResourceClient<T>`] whose requests are
//! answered from a queue of expectations instead of an actor.
//!
//! Mocks fit logic that sits *around* a client, such as retry loops and
//! error mapping. Anything that depends on what the record itself does is
//! better tested against a real `ResourceActor`.
//!
//! ## Scripted replies
//!
//! ```rust
//! use actor_framework::mock::MockClient;
//! use actor_framework::{ActorEntity, FrameworkError};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug, PartialEq)] struct Lot { id: u32, quantity: u32 }
//! #[derive(Debug)] struct LotCreate;
//! #[derive(Debug)] struct LotUpdate;
//! #[derive(Debug)] enum LotAction {}
//! #[derive(Debug, thiserror::Error)] #[error("lot error")] struct LotError;
//!
//! #[async_trait]
//! impl ActorEntity for Lot {
//!     type Id = u32; type Create = LotCreate; type Update = LotUpdate;
//!     type Action = LotAction; type ActionResult = (); type Context = (); type Error = LotError;
//!     fn from_create_params(id: u32, _: LotCreate) -> Result<Self, Self::Error> {
//!         Ok(Self { id, quantity: 0 })
//!     }
//!     async fn on_update(&mut self, _: LotUpdate, _: &()) -> Result<(), Self::Error> { Ok(()) }
//!     async fn handle_action(&mut self, action: LotAction, _: &()) -> Result<(), Self::Error> {
//!         match action {}
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Lot>::new();
//!     mock.expect_get(7).return_ok(Some(Lot { id: 7, quantity: 3 }));
//!     mock.expect_list().return_err(FrameworkError::ActorClosed);
//!
//!     let client = mock.client();
//!     assert_eq!(client.get(7).await.unwrap().unwrap().quantity, 3);
//!     assert!(matches!(client.list().await, Err(FrameworkError::ActorClosed)));
//!     mock.verify();
//! }
//! ```
//!
//! ## Inspecting requests
//!
//! [`create_mock_client`] returns the receiving end of the channel instead.
//! Pull requests off it with [`expect_get`] / [`expect_action`] and answer
//! them by hand, asserting on the payload the wrapper produced.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

/// An expected request and the reply it gets.
enum Expectation<T: ActorEntity> {
    Get {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    List {
        response: Result<Vec<T>, FrameworkError>,
    },
    Create {
        response: Result<T::Id, FrameworkError>,
    },
    Update {
        id: T::Id,
        response: Result<T, FrameworkError>,
    },
    Action {
        id: T::Id,
        response: Result<T::ActionResult, FrameworkError>,
    },
}

type Queue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A mock client with expectation tracking for fluent testing.
///
/// Expectations are consumed in the order they were registered. A request
/// that does not match the next expectation panics the mock task, which the
/// caller observes as [`FrameworkError::ActorDropped`].
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Queue<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Queue<T> = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = queue.lock().unwrap().pop_front();

                match (request, expectation) {
                    (
                        ResourceRequest::Get { id, respond_to },
                        Some(Expectation::Get { id: want, response }),
                    ) => {
                        assert_eq!(id, want, "get called with unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::List { respond_to },
                        Some(Expectation::List { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Create { respond_to, .. },
                        Some(Expectation::Create { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Update { id, respond_to, .. },
                        Some(Expectation::Update { id: want, response }),
                    ) => {
                        assert_eq!(id, want, "update called with unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Action { id, respond_to, .. },
                        Some(Expectation::Action { id: want, response }),
                    ) => {
                        assert_eq!(id, want, "action called with unexpected id");
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    pub fn expect_get(&mut self, id: T::Id) -> GetExpectationBuilder<T> {
        GetExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    pub fn expect_list(&mut self) -> ListExpectationBuilder<T> {
        ListExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    pub fn expect_create(&mut self) -> CreateExpectationBuilder<T> {
        CreateExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    pub fn expect_update(&mut self, id: T::Id) -> UpdateExpectationBuilder<T> {
        UpdateExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    pub fn expect_action(&mut self, id: T::Id) -> ActionExpectationBuilder<T> {
        ActionExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Panics if any expectation was not consumed.
    pub fn verify(&self) {
        let remaining = self.expectations.lock().unwrap().len();
        if remaining > 0 {
            panic!("Not all expectations were met. {remaining} remaining");
        }
    }
}

/// Builder for `get` expectations.
pub struct GetExpectationBuilder<T: ActorEntity> {
    id: T::Id,
    expectations: Queue<T>,
}

impl<T: ActorEntity> GetExpectationBuilder<T> {
    pub fn return_ok(self, value: Option<T>) {
        self.push(Ok(value));
    }

    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<Option<T>, FrameworkError>) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Get { id: self.id, response });
    }
}

/// Builder for `list` expectations.
pub struct ListExpectationBuilder<T: ActorEntity> {
    expectations: Queue<T>,
}

impl<T: ActorEntity> ListExpectationBuilder<T> {
    pub fn return_ok(self, values: Vec<T>) {
        self.push(Ok(values));
    }

    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<Vec<T>, FrameworkError>) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::List { response });
    }
}

/// Builder for `create` expectations.
pub struct CreateExpectationBuilder<T: ActorEntity> {
    expectations: Queue<T>,
}

impl<T: ActorEntity> CreateExpectationBuilder<T> {
    pub fn return_ok(self, id: T::Id) {
        self.push(Ok(id));
    }

    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<T::Id, FrameworkError>) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Create { response });
    }
}

/// Builder for `update` expectations.
pub struct UpdateExpectationBuilder<T: ActorEntity> {
    id: T::Id,
    expectations: Queue<T>,
}

impl<T: ActorEntity> UpdateExpectationBuilder<T> {
    pub fn return_ok(self, value: T) {
        self.push(Ok(value));
    }

    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<T, FrameworkError>) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Update { id: self.id, response });
    }
}

/// Builder for `action` expectations.
pub struct ActionExpectationBuilder<T: ActorEntity> {
    id: T::Id,
    expectations: Queue<T>,
}

impl<T: ActorEntity> ActionExpectationBuilder<T> {
    pub fn return_ok(self, result: T::ActionResult) {
        self.push(Ok(result));
    }

    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<T::ActionResult, FrameworkError>) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Action { id: self.id, response });
    }
}

// =============================================================================
// RAW REQUEST HELPERS
// =============================================================================

/// Creates a client and the receiver its requests land on.
///
/// Nothing answers the requests: the test pulls them off the receiver with
/// the `expect_*` helpers below and replies through the returned sender.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Returns the next request if it is a `Get`.
pub async fn expect_get<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, oneshot::Sender<Result<Option<T>, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Returns the next request if it is an `Action`.
pub async fn expect_action<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    T::Id,
    T::Action,
    oneshot::Sender<Result<T::ActionResult, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Clone, Debug, PartialEq)]
    struct Lot {
        id: u32,
        crop: String,
        quantity: u32,
    }

    #[derive(Debug)]
    struct LotCreate {
        crop: String,
    }

    #[derive(Debug)]
    struct LotUpdate;

    #[derive(Debug)]
    enum LotAction {
        Take(u32),
    }

    #[derive(Debug, thiserror::Error)]
    #[error("Lot error")]
    struct LotError;

    #[async_trait]
    impl ActorEntity for Lot {
        type Id = u32;
        type Create = LotCreate;
        type Update = LotUpdate;
        type Action = LotAction;
        type ActionResult = u32;
        type Context = ();
        type Error = LotError;

        fn from_create_params(id: u32, params: LotCreate) -> Result<Self, Self::Error> {
            Ok(Self {
                id,
                crop: params.crop,
                quantity: 0,
            })
        }

        async fn on_update(&mut self, _update: LotUpdate, _ctx: &()) -> Result<(), Self::Error> {
            Ok(())
        }

        async fn handle_action(
            &mut self,
            action: LotAction,
            _ctx: &(),
        ) -> Result<u32, Self::Error> {
            match action {
                LotAction::Take(n) => Ok(self.quantity.saturating_sub(n)),
            }
        }
    }

    fn lot(id: u32, crop: &str, quantity: u32) -> Lot {
        Lot {
            id,
            crop: crop.to_string(),
            quantity,
        }
    }

    #[tokio::test]
    async fn test_raw_requests_can_be_inspected() {
        let (client, mut receiver) = create_mock_client::<Lot>(10);

        let task = tokio::spawn(async move { client.perform_action(3, LotAction::Take(2)).await });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, 3);
        assert!(matches!(action, LotAction::Take(2)));
        responder.send(Ok(8)).unwrap();

        assert_eq!(task.await.unwrap().unwrap(), 8);
    }

    #[tokio::test]
    async fn test_mock_client_with_expectations() {
        let mut mock = MockClient::<Lot>::new();
        mock.expect_create().return_ok(1);
        mock.expect_list().return_ok(vec![lot(1, "Corn", 10)]);
        mock.expect_update(1).return_err(FrameworkError::NotFound("1".into()));

        let client = mock.client();

        let id = client
            .create(LotCreate {
                crop: "Corn".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(id, 1);

        let all = client.list().await.unwrap();
        assert_eq!(all, vec![lot(1, "Corn", 10)]);

        let missing = client.update(1, LotUpdate).await;
        assert!(matches!(missing, Err(FrameworkError::NotFound(id)) if id == "1"));

        mock.verify();
    }

    #[tokio::test]
    async fn test_get_expectations_answer_in_order() {
        let mut mock = MockClient::<Lot>::new();
        mock.expect_get(2).return_ok(Some(lot(2, "Rice", 4)));
        mock.expect_get(5).return_ok(None);

        let client = mock.client();
        assert_eq!(client.get(2).await.unwrap(), Some(lot(2, "Rice", 4)));
        assert_eq!(client.get(5).await.unwrap(), None);

        mock.verify();
    }

    #[tokio::test]
    async fn test_mismatched_request_surfaces_as_dropped_actor() {
        let mut mock = MockClient::<Lot>::new();
        mock.expect_list().return_ok(vec![]);

        let result = mock.client().get(1).await;
        assert!(matches!(result, Err(FrameworkError::ActorDropped)));
    }
}
