//! # Resource Actor
//!
//! The server half of the framework: owns every open entity of one type and
//! drains [`ResourceRequest`]s sequentially.

use crate::framework::client::ResourceClient;
use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use crate::framework::message::ResourceRequest;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a collection of entities.
///
/// # Architecture Note
/// This struct owns the state (`store`) and the receiver end of the channel.
///
/// **Concurrency Model**:
/// The actor processes its messages *sequentially* in a single task. An action is
/// awaited to completion before the next message is received, so every
/// read-modify-write an entity performs is exclusive without a `Mutex`.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `ResourceActor::new()` to get the `actor` (server) and `client` (interface).
/// 2.  **Wire**: Pass dependencies into `actor.run(context)`.
/// 3.  **Run**: Spawn the run loop in a background task.
///
/// ```rust
/// use levelup_core::framework::{ActorEntity, ResourceActor};
/// use async_trait::async_trait;
///
/// #[derive(Debug)] struct Counter { hits: u32 }
/// #[derive(Debug)] struct CounterOpen;
/// #[derive(Debug)] enum CounterAction { Hit }
/// #[derive(Debug, thiserror::Error)] #[error("counter error")] struct CounterError;
///
/// #[async_trait]
/// impl ActorEntity for Counter {
///     type Id = u32;
///     type Create = CounterOpen;
///     type Action = CounterAction;
///     type ActionResult = u32;
///     type Context = ();
///     type Error = CounterError;
///
///     fn from_create_params(_: u32, _: CounterOpen) -> Result<Self, Self::Error> { Ok(Self { hits: 0 }) }
///     async fn handle_action(&mut self, _: CounterAction, _: &()) -> Result<u32, Self::Error> {
///         self.hits += 1;
///         Ok(self.hits)
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::<Counter>::new(10);
///     tokio::spawn(actor.run(()));
///
///     let id = client.create(CounterOpen).await.unwrap();
///     assert_eq!(client.perform_action(id, CounterAction::Hit).await.unwrap(), 1);
/// }
/// ```
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    next_id: u32,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// `buffer_size` is the capacity of the MPSC channel. When it is full, client
    /// calls wait until there is space.
    ///
    /// # Panics
    /// If `buffer_size` is 0.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            next_id: 1,
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    ///
    /// # Context Injection
    /// The `context` argument is injected into every entity hook.
    pub async fn run(mut self, context: T::Context) {
        // Extract just the type name (e.g., "CartSession" instead of the full path)
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = T::Id::from(self.next_id);
                    self.next_id += 1;

                    match T::from_create_params(id.clone(), params) {
                        Ok(mut item) => {
                            if let Err(e) = item.on_create(&context).await {
                                warn!(entity_type, error = %e, "on_create failed");
                                let _ =
                                    respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                                continue;
                            }
                            self.store.insert(id.clone(), item);
                            info!(entity_type, %id, size = self.store.len(), "Created");
                            let _ = respond_to.send(Ok(id));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    if let Some(item) = self.store.get_mut(&id) {
                        let result = item
                            .handle_action(action, &context)
                            .await
                            .map_err(|e| FrameworkError::EntityError(Box::new(e)));
                        match &result {
                            Ok(_) => info!(entity_type, %id, "Action ok"),
                            Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                        }
                        let _ = respond_to.send(result);
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    if let Some(item) = self.store.get(&id) {
                        if let Err(e) = item.on_delete(&context).await {
                            warn!(entity_type, %id, error = %e, "on_delete failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                            continue;
                        }
                        self.store.remove(&id);
                        info!(entity_type, %id, size = self.store.len(), "Deleted");
                        let _ = respond_to.send(Ok(()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Debug)]
    struct Tally {
        total: i64,
    }

    #[derive(Debug)]
    struct TallyOpen {
        start: i64,
    }

    #[derive(Debug)]
    enum TallyAction {
        Add(i64),
        Fail,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("tally refused")]
    struct TallyError;

    #[async_trait]
    impl ActorEntity for Tally {
        type Id = u32;
        type Create = TallyOpen;
        type Action = TallyAction;
        type ActionResult = i64;
        type Context = ();
        type Error = TallyError;

        fn from_create_params(_id: u32, params: TallyOpen) -> Result<Self, Self::Error> {
            Ok(Self {
                total: params.start,
            })
        }

        async fn handle_action(
            &mut self,
            action: TallyAction,
            _ctx: &Self::Context,
        ) -> Result<i64, Self::Error> {
            match action {
                TallyAction::Add(n) => {
                    // Yield mid-update: sequential processing must still hold.
                    let before = self.total;
                    tokio::task::yield_now().await;
                    self.total = before + n;
                    Ok(self.total)
                }
                TallyAction::Fail => Err(TallyError),
            }
        }
    }

    #[tokio::test]
    async fn test_lifecycle_create_action_delete() {
        let (actor, client) = ResourceActor::<Tally>::new(10);
        let handle = tokio::spawn(actor.run(()));

        let id = client.create(TallyOpen { start: 5 }).await.unwrap();
        assert_eq!(id, 1);
        assert_eq!(client.perform_action(id, TallyAction::Add(3)).await.unwrap(), 8);

        let err = client.perform_action(id, TallyAction::Fail).await.unwrap_err();
        assert!(matches!(err, FrameworkError::EntityError(_)));

        client.delete(id).await.unwrap();
        let missing = client.perform_action(id, TallyAction::Add(1)).await.unwrap_err();
        assert!(matches!(missing, FrameworkError::NotFound(ref s) if s == "1"));

        drop(client);
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_concurrent_actions_are_serialized() {
        let (actor, client) = ResourceActor::<Tally>::new(64);
        tokio::spawn(actor.run(()));
        let id = client.create(TallyOpen { start: 0 }).await.unwrap();

        let mut tasks = Vec::new();
        for _ in 0..50 {
            let client = client.clone();
            tasks.push(tokio::spawn(async move {
                client.perform_action(id, TallyAction::Add(1)).await
            }));
        }
        for task in tasks {
            task.await.unwrap().unwrap();
        }

        assert_eq!(client.perform_action(id, TallyAction::Add(0)).await.unwrap(), 50);
    }

    #[tokio::test]
    async fn test_closed_actor_reports_actor_closed() {
        let (actor, client) = ResourceActor::<Tally>::new(1);
        drop(actor);
        let err = client.create(TallyOpen { start: 0 }).await.unwrap_err();
        assert!(matches!(err, FrameworkError::ActorClosed));
    }
}
