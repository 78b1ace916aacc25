//! In-memory implementation of [`RecipeStore`].
//!
//! All state lives behind a single `tokio::sync::RwLock`; every mutation,
//! including each toggle, runs under one write guard and is therefore
//! atomic. Timestamps handed out by the store are strictly increasing so
//! listings ordered by time are deterministic.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use recipebox_core::error::AppError;
use recipebox_core::result::AppResult;
use recipebox_entity::category::{Category, CategoryOption, CategoryWithCount};
use recipebox_entity::engagement::{FavoriteState, LikeState};
use recipebox_entity::recipe::{NewRecipe, Recipe, RecipeCard, RecipeUpdate};
use recipebox_entity::tag::Tag;
use recipebox_entity::user::{CreateUser, User};

use crate::query::{CardOrder, CardPage, CardQuery, CardScope};
use crate::store::RecipeStore;

/// (user_id, recipe_id)
type EngagementKey = (Uuid, Uuid);

#[derive(Debug, Default)]
struct State {
    users: HashMap<Uuid, User>,
    categories: HashMap<Uuid, Category>,
    recipes: HashMap<Uuid, Recipe>,
    likes: HashMap<EngagementKey, DateTime<Utc>>,
    favorites: HashMap<EngagementKey, DateTime<Utc>>,
    tags: HashMap<Uuid, Tag>,
    /// (recipe_id, tag_id)
    recipe_tags: HashSet<(Uuid, Uuid)>,
    last_timestamp: Option<DateTime<Utc>>,
}

impl State {
    fn now(&mut self) -> DateTime<Utc> {
        let mut now = Utc::now();
        if let Some(last) = self.last_timestamp {
            if now <= last {
                now = last + Duration::microseconds(1);
            }
        }
        self.last_timestamp = Some(now);
        now
    }

    fn likes_count(&self, recipe_id: Uuid) -> i64 {
        self.likes.keys().filter(|(_, r)| *r == recipe_id).count() as i64
    }

    fn card(&self, recipe: &Recipe, viewer: Option<Uuid>) -> RecipeCard {
        let category_name = self
            .categories
            .get(&recipe.category_id)
            .map(|c| c.name.clone())
            .unwrap_or_default();
        let overlay = |set: &HashMap<EngagementKey, DateTime<Utc>>| {
            viewer.is_some_and(|v| set.contains_key(&(v, recipe.id)))
        };

        RecipeCard {
            id: recipe.id,
            owner_id: recipe.owner_id,
            category_id: recipe.category_id,
            category_name,
            title: recipe.title.clone(),
            content: recipe.content.clone(),
            visibility: recipe.visibility,
            created_at: recipe.created_at,
            updated_at: recipe.updated_at,
            likes_count: self.likes_count(recipe.id),
            liked_by_me: overlay(&self.likes),
            favorited_by_me: overlay(&self.favorites),
        }
    }

    fn in_scope(&self, recipe: &Recipe, scope: CardScope) -> bool {
        match scope {
            CardScope::Public => recipe.is_public(),
            CardScope::OwnedBy(owner) => recipe.owner_id == owner,
            CardScope::FavoritedBy(user) => self.favorites.contains_key(&(user, recipe.id)),
        }
    }
}

fn matches_search(recipe: &Recipe, search: Option<&str>) -> bool {
    match search {
        None => true,
        Some(needle) => {
            let needle = needle.to_lowercase();
            recipe.title.to_lowercase().contains(&needle)
                || recipe.content.to_lowercase().contains(&needle)
        }
    }
}

/// A [`RecipeStore`] held entirely in process memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: RwLock<State>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a tag to a recipe, creating the tag if needed.
    pub async fn attach_tag(&self, recipe_id: Uuid, name: &str) -> Tag {
        let mut state = self.state.write().await;
        let tag = match state.tags.values().find(|t| t.name == name) {
            Some(existing) => existing.clone(),
            None => {
                let tag = Tag {
                    id: Uuid::new_v4(),
                    name: name.to_string(),
                };
                state.tags.insert(tag.id, tag.clone());
                tag
            }
        };
        state.recipe_tags.insert((recipe_id, tag.id));
        tag
    }

    /// Number of like rows for a recipe.
    pub async fn like_rows(&self, recipe_id: Uuid) -> usize {
        self.state.read().await.likes_count(recipe_id) as usize
    }

    /// Number of favorite rows for a recipe.
    pub async fn favorite_rows(&self, recipe_id: Uuid) -> usize {
        let state = self.state.read().await;
        state.favorites.keys().filter(|(_, r)| *r == recipe_id).count()
    }
}

#[async_trait]
impl RecipeStore for MemoryStore {
    async fn find_user(&self, id: Uuid) -> AppResult<Option<User>> {
        Ok(self.state.read().await.users.get(&id).cloned())
    }

    async fn upsert_user(&self, data: CreateUser) -> AppResult<User> {
        let mut state = self.state.write().await;
        if let Some(user) = state.users.values_mut().find(|u| u.email == data.email) {
            if data.name.is_some() {
                user.name = data.name;
            }
            return Ok(user.clone());
        }

        let user = User {
            id: Uuid::new_v4(),
            name: data.name,
            email: data.email,
            created_at: state.now(),
        };
        state.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn ensure_categories(&self, names: &[String]) -> AppResult<u64> {
        let mut state = self.state.write().await;
        let mut inserted = 0;
        for name in names {
            if state.categories.values().any(|c| &c.name == name) {
                continue;
            }
            let category = Category {
                id: Uuid::new_v4(),
                name: name.clone(),
                created_at: state.now(),
            };
            state.categories.insert(category.id, category);
            inserted += 1;
        }
        Ok(inserted)
    }

    async fn list_categories(&self) -> AppResult<Vec<CategoryWithCount>> {
        let state = self.state.read().await;
        let mut categories: Vec<CategoryWithCount> = state
            .categories
            .values()
            .map(|c| CategoryWithCount {
                id: c.id,
                name: c.name.clone(),
                created_at: c.created_at,
                recipe_count: state
                    .recipes
                    .values()
                    .filter(|r| r.category_id == c.id)
                    .count() as i64,
            })
            .collect();
        categories.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(categories)
    }

    async fn list_category_options(&self) -> AppResult<Vec<CategoryOption>> {
        let state = self.state.read().await;
        let mut options: Vec<CategoryOption> =
            state.categories.values().cloned().map(Into::into).collect();
        options.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(options)
    }

    async fn find_category(&self, id: Uuid) -> AppResult<Option<Category>> {
        Ok(self.state.read().await.categories.get(&id).cloned())
    }

    async fn category_name_exists(&self, name: &str) -> AppResult<bool> {
        let state = self.state.read().await;
        Ok(state.categories.values().any(|c| c.name == name))
    }

    async fn count_categories(&self) -> AppResult<i64> {
        Ok(self.state.read().await.categories.len() as i64)
    }

    async fn insert_category_capped(&self, name: &str, max: i64) -> AppResult<Option<Category>> {
        let mut state = self.state.write().await;
        if state.categories.len() as i64 >= max {
            return Ok(None);
        }
        if state.categories.values().any(|c| c.name == name) {
            return Err(AppError::already_exists(format!(
                "Category '{name}' already exists"
            )));
        }
        let category = Category {
            id: Uuid::new_v4(),
            name: name.to_string(),
            created_at: state.now(),
        };
        state.categories.insert(category.id, category.clone());
        Ok(Some(category))
    }

    async fn find_recipe(&self, id: Uuid) -> AppResult<Option<Recipe>> {
        Ok(self.state.read().await.recipes.get(&id).cloned())
    }

    async fn insert_recipe(&self, data: NewRecipe) -> AppResult<Recipe> {
        let mut state = self.state.write().await;
        let now = state.now();
        let recipe = Recipe {
            id: Uuid::new_v4(),
            owner_id: data.owner_id,
            category_id: data.category_id,
            title: data.title,
            content: data.content,
            visibility: data.visibility,
            created_at: now,
            updated_at: now,
        };
        state.recipes.insert(recipe.id, recipe.clone());
        Ok(recipe)
    }

    async fn update_recipe(&self, id: Uuid, data: RecipeUpdate) -> AppResult<Option<Recipe>> {
        let mut state = self.state.write().await;
        let now = state.now();
        Ok(state.recipes.get_mut(&id).map(|recipe| {
            recipe.category_id = data.category_id;
            recipe.title = data.title;
            recipe.content = data.content;
            recipe.visibility = data.visibility;
            recipe.updated_at = now;
            recipe.clone()
        }))
    }

    async fn delete_recipe(&self, id: Uuid) -> AppResult<bool> {
        let mut state = self.state.write().await;
        if state.recipes.remove(&id).is_none() {
            return Ok(false);
        }
        state.likes.retain(|(_, r), _| *r != id);
        state.favorites.retain(|(_, r), _| *r != id);
        state.recipe_tags.retain(|(r, _)| *r != id);
        Ok(true)
    }

    async fn toggle_visibility(&self, id: Uuid) -> AppResult<Option<Recipe>> {
        let mut state = self.state.write().await;
        let now = state.now();
        Ok(state.recipes.get_mut(&id).map(|recipe| {
            recipe.visibility = recipe.visibility.toggled();
            recipe.updated_at = now;
            recipe.clone()
        }))
    }

    async fn toggle_favorite(
        &self,
        user_id: Uuid,
        recipe_id: Uuid,
    ) -> AppResult<Option<FavoriteState>> {
        let mut state = self.state.write().await;
        if !state.recipes.contains_key(&recipe_id) {
            return Ok(None);
        }
        let key = (user_id, recipe_id);
        let favorited = if state.favorites.remove(&key).is_some() {
            false
        } else {
            let now = state.now();
            state.favorites.insert(key, now);
            true
        };
        Ok(Some(FavoriteState { favorited }))
    }

    async fn toggle_like(&self, user_id: Uuid, recipe_id: Uuid) -> AppResult<Option<LikeState>> {
        let mut state = self.state.write().await;
        if !state.recipes.get(&recipe_id).is_some_and(Recipe::is_public) {
            return Ok(None);
        }
        let key = (user_id, recipe_id);
        let liked = if state.likes.remove(&key).is_some() {
            false
        } else {
            let now = state.now();
            state.likes.insert(key, now);
            true
        };
        Ok(Some(LikeState {
            liked,
            likes_count: state.likes_count(recipe_id),
        }))
    }

    async fn query_cards(&self, query: &CardQuery) -> AppResult<CardPage> {
        let state = self.state.read().await;
        let mut cards: Vec<RecipeCard> = state
            .recipes
            .values()
            .filter(|r| state.in_scope(r, query.scope))
            .filter(|r| matches_search(r, query.search.as_deref()))
            .map(|r| state.card(r, query.viewer))
            .collect();

        match query.order {
            CardOrder::Newest => {
                cards.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)))
            }
            CardOrder::MostLiked => cards.sort_by(|a, b| {
                b.likes_count
                    .cmp(&a.likes_count)
                    .then(b.created_at.cmp(&a.created_at))
                    .then(b.id.cmp(&a.id))
            }),
            CardOrder::RecentlyUpdated => {
                cards.sort_by(|a, b| b.updated_at.cmp(&a.updated_at).then(b.id.cmp(&a.id)))
            }
        }

        let total = cards.len() as u64;
        let window = cards
            .into_iter()
            .skip(usize::try_from(query.offset).unwrap_or(usize::MAX));
        let items = match query.limit {
            Some(limit) => window
                .take(usize::try_from(limit).unwrap_or(usize::MAX))
                .collect(),
            None => window.collect(),
        };
        Ok(CardPage { items, total })
    }

    async fn find_card(&self, viewer: Option<Uuid>, id: Uuid) -> AppResult<Option<RecipeCard>> {
        let state = self.state.read().await;
        Ok(state.recipes.get(&id).map(|r| state.card(r, viewer)))
    }

    async fn tag_names(&self, recipe_id: Uuid) -> AppResult<Vec<String>> {
        let state = self.state.read().await;
        let mut names: Vec<String> = state
            .recipe_tags
            .iter()
            .filter(|(r, _)| *r == recipe_id)
            .filter_map(|(_, t)| state.tags.get(t).map(|tag| tag.name.clone()))
            .collect();
        names.sort();
        Ok(names)
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }
}
