// src/services/collection_service.rs
//
// CollectionStore - Optimistic Mutation Engine
//
// Every mutation follows the same contract shape:
// 1. validate input locally
// 2. apply the change to the in-memory snapshot immediately
// 3. issue the corresponding remote call
// 4a. on remote success, the optimistic state is final
// 4b. on remote failure, revert exactly the change from step 2 and surface
//     a structured error
//
// Confirmation or rollback happens in whatever order the remote calls
// resolve, not the order they were issued. Each optimistic apply therefore
// stamps a monotonic version for its entity key; a resolution whose stamp is
// no longer current was superseded by a later mutation and is discarded.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use log::{debug, warn};

use crate::domain::{
    validate_rating_value, validate_watchlist_description, validate_watchlist_name, MovieSummary,
    Profile, ProfileUpdate, Rating, Watchlist,
};
use crate::error::{AppError, AppResult};
use crate::gateways::CollectionGateway;
use crate::services::SessionManager;

/// Immutable view of the user-owned collections, cloned out for rendering.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollectionSnapshot {
    pub favorite_ids: HashSet<String>,
    pub favorites: Vec<MovieSummary>,
    pub watchlists: Vec<Watchlist>,
    pub ratings: HashMap<String, Rating>,
    pub profile: Option<Profile>,
}

#[derive(Default)]
struct CollectionState {
    favorite_ids: HashSet<String>,
    favorites: Vec<MovieSummary>,
    watchlists: Vec<Watchlist>,
    ratings: HashMap<String, Rating>,
    profile: Option<Profile>,

    /// Per-entity mutation stamps; not user-visible state.
    versions: HashMap<String, u64>,
}

impl CollectionState {
    fn bump(&mut self, key: String) -> u64 {
        let counter = self.versions.entry(key).or_insert(0);
        *counter += 1;
        *counter
    }

    fn is_current(&self, key: &str, stamp: u64) -> bool {
        self.versions.get(key).copied() == Some(stamp)
    }

    fn snapshot(&self) -> CollectionSnapshot {
        CollectionSnapshot {
            favorite_ids: self.favorite_ids.clone(),
            favorites: self.favorites.clone(),
            watchlists: self.watchlists.clone(),
            ratings: self.ratings.clone(),
            profile: self.profile.clone(),
        }
    }

    fn watchlist_mut(&mut self, watchlist_id: &str) -> Option<&mut Watchlist> {
        self.watchlists.iter_mut().find(|wl| wl.id == watchlist_id)
    }
}

fn favorite_key(movie_id: &str) -> String {
    format!("favorite:{}", movie_id)
}

fn rating_key(movie_id: &str) -> String {
    format!("rating:{}", movie_id)
}

fn watchlist_key(watchlist_id: &str, movie_id: &str) -> String {
    format!("watchlist:{}:{}", watchlist_id, movie_id)
}

/// Holds the favorite set, watchlists, ratings and profile for the current
/// session, applying optimistic mutations against the remote collection
/// service and reconciling on failure.
pub struct CollectionStore {
    gateway: Arc<dyn CollectionGateway>,
    session: Arc<SessionManager>,
    state: Mutex<CollectionState>,
}

impl CollectionStore {
    pub fn new(gateway: Arc<dyn CollectionGateway>, session: Arc<SessionManager>) -> Self {
        Self {
            gateway,
            session,
            state: Mutex::new(CollectionState::default()),
        }
    }

    fn ensure_authenticated(&self) -> AppResult<()> {
        if self.session.is_authenticated() {
            Ok(())
        } else {
            Err(AppError::Auth("not authenticated".to_string()))
        }
    }

    /// An auth rejection from the remote service means the stored credentials
    /// are no longer valid: drop both tokens and return to Anonymous before
    /// surfacing the error.
    fn surface(&self, err: AppError) -> AppError {
        if matches!(err, AppError::Auth(_)) {
            warn!("remote rejected the session credentials, dropping them");
            self.session.logout();
        }
        err
    }

    // ========================================================================
    // READ ACCESSORS
    // ========================================================================

    pub fn snapshot(&self) -> CollectionSnapshot {
        self.state.lock().unwrap().snapshot()
    }

    pub fn is_favorite(&self, movie_id: &str) -> bool {
        self.state.lock().unwrap().favorite_ids.contains(movie_id)
    }

    pub fn favorites(&self) -> Vec<MovieSummary> {
        self.state.lock().unwrap().favorites.clone()
    }

    pub fn watchlists(&self) -> Vec<Watchlist> {
        self.state.lock().unwrap().watchlists.clone()
    }

    pub fn watchlist(&self, watchlist_id: &str) -> Option<Watchlist> {
        self.state
            .lock()
            .unwrap()
            .watchlists
            .iter()
            .find(|wl| wl.id == watchlist_id)
            .cloned()
    }

    pub fn ratings(&self) -> Vec<Rating> {
        let state = self.state.lock().unwrap();
        let mut ratings: Vec<Rating> = state.ratings.values().cloned().collect();
        ratings.sort_by(|a, b| a.movie_id.cmp(&b.movie_id));
        ratings
    }

    pub fn rating_for(&self, movie_id: &str) -> Option<Rating> {
        self.state.lock().unwrap().ratings.get(movie_id).cloned()
    }

    pub fn profile(&self) -> Option<Profile> {
        self.state.lock().unwrap().profile.clone()
    }

    /// Discard everything. A logout is a hard reset, not a partial teardown;
    /// state is rebuilt from the remote service on next load.
    pub fn reset(&self) {
        *self.state.lock().unwrap() = CollectionState::default();
    }

    // ========================================================================
    // LOADS - wholesale replacement, never local patching
    // ========================================================================

    pub async fn load_favorites(&self) -> AppResult<Vec<MovieSummary>> {
        let favorites = self.gateway.favorites().await.map_err(|e| self.surface(e))?;
        let mut state = self.state.lock().unwrap();
        state.favorite_ids = favorites.iter().map(|m| m.id.clone()).collect();
        state.favorites = favorites.clone();
        Ok(favorites)
    }

    pub async fn load_watchlists(&self) -> AppResult<Vec<Watchlist>> {
        let watchlists = self.gateway.watchlists().await.map_err(|e| self.surface(e))?;
        self.state.lock().unwrap().watchlists = watchlists.clone();
        Ok(watchlists)
    }

    pub async fn load_ratings(&self) -> AppResult<Vec<Rating>> {
        let ratings = self.gateway.ratings().await.map_err(|e| self.surface(e))?;
        let mut state = self.state.lock().unwrap();
        state.ratings = ratings
            .iter()
            .map(|r| (r.movie_id.clone(), r.clone()))
            .collect();
        Ok(ratings)
    }

    pub async fn load_profile(&self) -> AppResult<Profile> {
        let profile = self.gateway.profile().await.map_err(|e| self.surface(e))?;
        self.state.lock().unwrap().profile = Some(profile.clone());
        Ok(profile)
    }

    pub async fn update_profile(&self, update: ProfileUpdate) -> AppResult<Profile> {
        self.ensure_authenticated()?;
        let profile = self
            .gateway
            .update_profile(update)
            .await
            .map_err(|e| self.surface(e))?;
        self.state.lock().unwrap().profile = Some(profile.clone());
        Ok(profile)
    }

    // ========================================================================
    // OPTIMISTIC MUTATIONS
    // ========================================================================

    /// Flip favorite membership for a movie. Returns the new membership.
    pub async fn toggle_favorite(&self, movie: &MovieSummary) -> AppResult<bool> {
        self.ensure_authenticated()?;

        // Optimistic apply: the renderer observes the flip immediately.
        let (was_favorite, removed_at, stamp) = {
            let mut state = self.state.lock().unwrap();
            let stamp = state.bump(favorite_key(&movie.id));
            if state.favorite_ids.remove(&movie.id) {
                let removed_at = state.favorites.iter().position(|m| m.id == movie.id);
                if let Some(index) = removed_at {
                    state.favorites.remove(index);
                }
                (true, removed_at, stamp)
            } else {
                state.favorite_ids.insert(movie.id.clone());
                state.favorites.push(movie.clone());
                (false, None, stamp)
            }
        };
        debug!("favorite toggled optimistically: {}", movie.id);

        let outcome = if was_favorite {
            self.gateway.remove_favorite(&movie.id).await
        } else {
            self.gateway.add_favorite(&movie.id).await
        };

        if let Err(err) = outcome {
            let mut state = self.state.lock().unwrap();
            if state.is_current(&favorite_key(&movie.id), stamp) {
                warn!("favorite toggle failed, rolling back: {}", movie.id);
                if was_favorite {
                    state.favorite_ids.insert(movie.id.clone());
                    let index = removed_at.unwrap_or(state.favorites.len());
                    let index = index.min(state.favorites.len());
                    state.favorites.insert(index, movie.clone());
                } else {
                    state.favorite_ids.remove(&movie.id);
                    state.favorites.retain(|m| m.id != movie.id);
                }
            } else {
                debug!("favorite rollback superseded, discarding: {}", movie.id);
            }
            drop(state);
            return Err(self.surface(err));
        }

        Ok(!was_favorite)
    }

    /// Optimistically append a movie to a watchlist. A movie that is already
    /// present is a no-op: nothing changes locally and no remote call is
    /// issued.
    pub async fn add_to_watchlist(&self, watchlist_id: &str, movie: &MovieSummary) -> AppResult<()> {
        self.ensure_authenticated()?;

        let stamp = {
            let mut state = self.state.lock().unwrap();
            let Some(watchlist) = state.watchlist_mut(watchlist_id) else {
                return Err(AppError::NotFound(format!(
                    "Watchlist {} does not exist",
                    watchlist_id
                )));
            };
            if !watchlist.add_movie(movie.clone()) {
                return Ok(());
            }
            state.bump(watchlist_key(watchlist_id, &movie.id))
        };
        debug!("movie {} added to watchlist {}", movie.id, watchlist_id);

        if let Err(err) = self.gateway.add_to_watchlist(watchlist_id, &movie.id).await {
            let mut state = self.state.lock().unwrap();
            if state.is_current(&watchlist_key(watchlist_id, &movie.id), stamp) {
                warn!(
                    "watchlist add failed, rolling back: {} / {}",
                    watchlist_id, movie.id
                );
                if let Some(watchlist) = state.watchlist_mut(watchlist_id) {
                    watchlist.remove_movie(&movie.id);
                }
            }
            drop(state);
            return Err(self.surface(err));
        }

        Ok(())
    }

    /// Optimistically remove a movie from a watchlist; both the id sequence
    /// and the materialized detail list change together. Absent ids are a
    /// no-op.
    pub async fn remove_from_watchlist(&self, watchlist_id: &str, movie_id: &str) -> AppResult<()> {
        self.ensure_authenticated()?;

        let (index, removed, stamp) = {
            let mut state = self.state.lock().unwrap();
            let Some(watchlist) = state.watchlist_mut(watchlist_id) else {
                return Err(AppError::NotFound(format!(
                    "Watchlist {} does not exist",
                    watchlist_id
                )));
            };
            let Some((index, removed)) = watchlist.remove_movie(movie_id) else {
                return Ok(());
            };
            let stamp = state.bump(watchlist_key(watchlist_id, movie_id));
            (index, removed, stamp)
        };
        debug!("movie {} removed from watchlist {}", movie_id, watchlist_id);

        if let Err(err) = self
            .gateway
            .remove_from_watchlist(watchlist_id, movie_id)
            .await
        {
            let mut state = self.state.lock().unwrap();
            if state.is_current(&watchlist_key(watchlist_id, movie_id), stamp) {
                warn!(
                    "watchlist remove failed, rolling back: {} / {}",
                    watchlist_id, movie_id
                );
                if let Some(watchlist) = state.watchlist_mut(watchlist_id) {
                    watchlist.restore_movie(index, removed);
                }
            }
            drop(state);
            return Err(self.surface(err));
        }

        Ok(())
    }

    /// Create an empty watchlist. Not optimistic: the id is server-assigned,
    /// so the list is inserted only once the create call succeeds.
    ///
    /// Create-and-add-a-movie is deliberately two sequential calls; if the
    /// add fails, the empty watchlist stays visible rather than being
    /// silently hidden.
    pub async fn create_watchlist(
        &self,
        name: &str,
        description: Option<&str>,
    ) -> AppResult<Watchlist> {
        self.ensure_authenticated()?;
        validate_watchlist_name(name)?;
        if let Some(description) = description {
            validate_watchlist_description(description)?;
        }

        let watchlist = self
            .gateway
            .create_watchlist(name.to_string(), description.map(str::to_string))
            .await
            .map_err(|e| self.surface(e))?;

        self.state.lock().unwrap().watchlists.push(watchlist.clone());
        debug!("watchlist created: {}", watchlist.id);
        Ok(watchlist)
    }

    /// Upsert the user's rating for a movie. An out-of-range value is
    /// rejected before any state change or remote call.
    pub async fn rate_movie(
        &self,
        movie: &MovieSummary,
        value: u8,
        review: Option<String>,
    ) -> AppResult<()> {
        validate_rating_value(value)?;
        self.ensure_authenticated()?;

        let (prior, stamp) = {
            let mut state = self.state.lock().unwrap();
            let stamp = state.bump(rating_key(&movie.id));
            let rating = Rating {
                movie_id: movie.id.clone(),
                value,
                review: review.clone(),
                movie_title: movie.title.clone(),
                movie_poster: movie.poster_path.clone(),
                created_at: chrono::Utc::now(),
            };
            (state.ratings.insert(movie.id.clone(), rating), stamp)
        };
        debug!("rating upserted optimistically: {} = {}", movie.id, value);

        if let Err(err) = self.gateway.rate_movie(&movie.id, value, review).await {
            let mut state = self.state.lock().unwrap();
            if state.is_current(&rating_key(&movie.id), stamp) {
                warn!("rating failed, rolling back: {}", movie.id);
                match prior {
                    Some(prior) => {
                        state.ratings.insert(movie.id.clone(), prior);
                    }
                    None => {
                        state.ratings.remove(&movie.id);
                    }
                }
            }
            drop(state);
            return Err(self.surface(err));
        }

        Ok(())
    }
}
