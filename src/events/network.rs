use crate::api::Api;
use crate::state::State;
use anyhow::Result;
use log::*;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Specify different network event types.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    FetchPosts,
}

/// Specify struct for managing state with network events.
///
pub struct Handler<'a> {
    state: &'a Arc<Mutex<State>>,
    api: &'a Api,
}

impl<'a> Handler<'a> {
    /// Return new instance with reference to state.
    ///
    pub fn new(state: &'a Arc<Mutex<State>>, api: &'a Api) -> Self {
        Handler { state, api }
    }

    /// Handle network events by type.
    ///
    pub async fn handle(&mut self, event: Event) -> Result<()> {
        debug!("Processing network event '{:?}'...", event);
        match event {
            Event::FetchPosts => self.fetch_posts().await?,
        }
        Ok(())
    }

    /// Update state with the posts served by the API.
    ///
    async fn fetch_posts(&mut self) -> Result<()> {
        info!("Fetching posts from {}...", self.api.base_url());
        match self.api.posts().await {
            Ok(posts) => {
                info!("Loaded {} posts.", posts.len());
                let mut state = self.state.lock().await;
                state.set_posts(posts);
                Ok(())
            }
            Err(e) => {
                let mut state = self.state.lock().await;
                state.set_fetch_error(e.to_string());
                Err(e.into())
            }
        }
    }
}
