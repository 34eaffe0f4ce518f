//! # Mock Booking Store
//!
//! [`MockBookingStore`] answers the store actor's channel protocol from a
//! queue of scripted expectations instead of real state. Hand its
//! [`client`](MockBookingStore::client) to a session to test session logic
//! without spawning the store actor, and to inject failures that are hard to
//! reproduce with real state.
//!
//! | | MockBookingStore | BookingStoreActor |
//! |---|---|---|
//! | **State** | None, replies are scripted | Real bookings |
//! | **Error injection** | `return_err(...)` | Requires reaching the state |
//! | **Use case** | Session logic around the repository | Full system flows |
//!
//! ```rust
//! use breakbuddy::clients::{mock::MockBookingStore, BookingRepository};
//! use breakbuddy::domain::BookingId;
//! use breakbuddy::store_actor::StoreError;
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockBookingStore::new();
//!     let id = BookingId::new();
//!     mock.expect_get(id).return_err(StoreError::ActorClosed);
//!
//!     let client = mock.client();
//!     assert_eq!(client.get_booking(&id).await, Err(StoreError::ActorClosed));
//!     mock.verify();
//! }
//! ```
//!
//! Requests are matched in order. A request that does not match the next
//! expectation panics inside the mock task and the caller sees
//! [`StoreError::ActorDropped`].

use crate::clients::BookingStoreClient;
use crate::domain::{Booking, BookingId, EmployeeId};
use crate::store_actor::{StoreError, StoreRequest};
use chrono::NaiveDate;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

/// An expected request and the reply to send back.
#[derive(Debug)]
enum Expectation {
    Load {
        employee: EmployeeId,
        date: NaiveDate,
        response: Result<Option<Booking>, StoreError>,
    },
    Get {
        id: BookingId,
        response: Result<Option<Booking>, StoreError>,
    },
    Save {
        response: Result<(), StoreError>,
    },
    Remove {
        id: BookingId,
        response: Result<(), StoreError>,
    },
    MarkServed {
        id: BookingId,
        response: Result<Booking, StoreError>,
    },
    ListForDate {
        date: NaiveDate,
        response: Result<Vec<Booking>, StoreError>,
    },
}

type Expectations = Arc<Mutex<VecDeque<Expectation>>>;

/// A scripted stand-in for the booking store actor.
///
/// # Example
/// ```ignore
/// let mut mock = MockBookingStore::new();
/// mock.expect_get(id).return_ok(Some(booking));
/// mock.expect_mark_served(id).return_ok(served);
///
/// let session = KitchenSession::open(chef, mock.client(), clock)?;
/// // ...
/// mock.verify(); // Ensures all expectations were met
/// ```
pub struct MockBookingStore {
    client: BookingStoreClient,
    expectations: Expectations,
    _handle: tokio::task::JoinHandle<()>,
}

impl Default for MockBookingStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MockBookingStore {
    /// Creates a mock with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<StoreRequest>(100);
        let expectations: Expectations = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = queue.lock().expect("mock expectations poisoned").pop_front();
                answer(request, expectation);
            }
        });

        Self {
            client: BookingStoreClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns a client wired to this mock.
    pub fn client(&self) -> BookingStoreClient {
        self.client.clone()
    }

    pub fn expect_load(
        &mut self,
        employee: EmployeeId,
        date: NaiveDate,
    ) -> ExpectationBuilder<Option<Booking>> {
        self.builder(move |response| Expectation::Load {
            employee,
            date,
            response,
        })
    }

    pub fn expect_get(&mut self, id: BookingId) -> ExpectationBuilder<Option<Booking>> {
        self.builder(move |response| Expectation::Get { id, response })
    }

    pub fn expect_save(&mut self) -> ExpectationBuilder<()> {
        self.builder(|response| Expectation::Save { response })
    }

    pub fn expect_remove(&mut self, id: BookingId) -> ExpectationBuilder<()> {
        self.builder(move |response| Expectation::Remove { id, response })
    }

    pub fn expect_mark_served(&mut self, id: BookingId) -> ExpectationBuilder<Booking> {
        self.builder(move |response| Expectation::MarkServed { id, response })
    }

    pub fn expect_list_for_date(&mut self, date: NaiveDate) -> ExpectationBuilder<Vec<Booking>> {
        self.builder(move |response| Expectation::ListForDate { date, response })
    }

    /// Panics unless every expectation has been consumed.
    pub fn verify(&self) {
        let remaining = self.expectations.lock().expect("mock expectations poisoned");
        if !remaining.is_empty() {
            panic!(
                "Not all expectations were met. {} remaining: {:?}",
                remaining.len(),
                remaining
            );
        }
    }

    fn builder<T>(
        &self,
        wrap: impl FnOnce(Result<T, StoreError>) -> Expectation + Send + 'static,
    ) -> ExpectationBuilder<T> {
        ExpectationBuilder {
            expectations: self.expectations.clone(),
            wrap: Box::new(wrap),
        }
    }
}

/// Records the reply for one expected request.
pub struct ExpectationBuilder<T> {
    expectations: Expectations,
    wrap: Box<dyn FnOnce(Result<T, StoreError>) -> Expectation + Send>,
}

impl<T> ExpectationBuilder<T> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: T) {
        self.push(Ok(value));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: StoreError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<T, StoreError>) {
        let expectation = (self.wrap)(response);
        self.expectations
            .lock()
            .expect("mock expectations poisoned")
            .push_back(expectation);
    }
}

fn answer(request: StoreRequest, expectation: Option<Expectation>) {
    match (request, expectation) {
        (
            StoreRequest::Load {
                employee,
                date,
                respond_to,
            },
            Some(Expectation::Load {
                employee: want_employee,
                date: want_date,
                response,
            }),
        ) => {
            assert_eq!((employee, date), (want_employee, want_date), "Load arguments");
            let _ = respond_to.send(response);
        }
        (StoreRequest::Get { id, respond_to }, Some(Expectation::Get { id: want, response })) => {
            assert_eq!(id, want, "Get id");
            let _ = respond_to.send(response);
        }
        (StoreRequest::Save { respond_to, .. }, Some(Expectation::Save { response })) => {
            let _ = respond_to.send(response);
        }
        (
            StoreRequest::Remove { id, respond_to },
            Some(Expectation::Remove { id: want, response }),
        ) => {
            assert_eq!(id, want, "Remove id");
            let _ = respond_to.send(response);
        }
        (
            StoreRequest::MarkServed { id, respond_to },
            Some(Expectation::MarkServed { id: want, response }),
        ) => {
            assert_eq!(id, want, "MarkServed id");
            let _ = respond_to.send(response);
        }
        (
            StoreRequest::ListForDate { date, respond_to },
            Some(Expectation::ListForDate {
                date: want,
                response,
            }),
        ) => {
            assert_eq!(date, want, "ListForDate date");
            let _ = respond_to.send(response);
        }
        (request, expectation) => {
            panic!("Unexpected request {request:?}, expected {expectation:?}");
        }
    }
}
