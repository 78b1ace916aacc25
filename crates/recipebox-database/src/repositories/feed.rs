//! Recipe card queries with per-viewer overlays.

use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use recipebox_core::result::AppResult;
use recipebox_entity::recipe::{RecipeCard, Visibility};

use crate::connection::db_error;
use crate::query::{CardOrder, CardPage, CardQuery, CardScope, like_pattern};

const CARD_COLUMNS: &str = r#"SELECT r.id, r.owner_id, r.category_id, c.name AS category_name,
       r.title, r.content, r.visibility, r.created_at, r.updated_at,
       COALESCE(lc.likes_count, 0) AS likes_count, "#;

const CARD_JOINS: &str = r#" FROM recipes r
JOIN categories c ON c.id = r.category_id
LEFT JOIN (SELECT recipe_id, COUNT(*) AS likes_count FROM likes GROUP BY recipe_id) lc
       ON lc.recipe_id = r.id"#;

/// Repository for recipe card listings.
#[derive(Debug, Clone)]
pub struct FeedRepository {
    pool: PgPool,
}

impl FeedRepository {
    /// Create a new feed repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Run a card listing and count its total matches.
    pub async fn query(&self, query: &CardQuery) -> AppResult<CardPage> {
        let mut count = QueryBuilder::<Postgres>::new("SELECT COUNT(*)");
        count.push(CARD_JOINS);
        push_filters(&mut count, query);
        let total: i64 = count
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(db_error("Failed to count recipe cards"))?;

        let mut select = QueryBuilder::<Postgres>::new(CARD_COLUMNS);
        push_overlays(&mut select, query.viewer);
        select.push(CARD_JOINS);
        push_filters(&mut select, query);
        select.push(match query.order {
            CardOrder::Newest => " ORDER BY r.created_at DESC, r.id DESC",
            CardOrder::MostLiked => {
                " ORDER BY COALESCE(lc.likes_count, 0) DESC, r.created_at DESC, r.id DESC"
            }
            CardOrder::RecentlyUpdated => " ORDER BY r.updated_at DESC, r.id DESC",
        });
        if let Some(limit) = query.limit {
            select.push(" LIMIT ").push_bind(to_sql_bound(limit));
        }
        if query.offset > 0 {
            select.push(" OFFSET ").push_bind(to_sql_bound(query.offset));
        }

        let items = select
            .build_query_as::<RecipeCard>()
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("Failed to load recipe cards"))?;

        Ok(CardPage {
            items,
            total: total.max(0) as u64,
        })
    }

    /// Load a single card, any visibility.
    pub async fn find_by_id(&self, viewer: Option<Uuid>, id: Uuid) -> AppResult<Option<RecipeCard>> {
        let mut select = QueryBuilder::<Postgres>::new(CARD_COLUMNS);
        push_overlays(&mut select, viewer);
        select.push(CARD_JOINS);
        select.push(" WHERE r.id = ").push_bind(id);

        select
            .build_query_as::<RecipeCard>()
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to load recipe card"))
    }
}

/// Append the `liked_by_me` and `favorited_by_me` columns. A `NULL` viewer
/// matches no rows, so anonymous overlays are always false.
fn push_overlays(qb: &mut QueryBuilder<'_, Postgres>, viewer: Option<Uuid>) {
    qb.push("EXISTS(SELECT 1 FROM likes l WHERE l.recipe_id = r.id AND l.user_id = ")
        .push_bind(viewer)
        .push(") AS liked_by_me, ");
    qb.push("EXISTS(SELECT 1 FROM favorites f WHERE f.recipe_id = r.id AND f.user_id = ")
        .push_bind(viewer)
        .push(") AS favorited_by_me");
}

fn push_filters(qb: &mut QueryBuilder<'_, Postgres>, query: &CardQuery) {
    match query.scope {
        CardScope::Public => {
            qb.push(" WHERE r.visibility = ").push_bind(Visibility::Public);
        }
        CardScope::OwnedBy(owner) => {
            qb.push(" WHERE r.owner_id = ").push_bind(owner);
        }
        CardScope::FavoritedBy(user) => {
            qb.push(" WHERE EXISTS(SELECT 1 FROM favorites fs WHERE fs.recipe_id = r.id AND fs.user_id = ")
                .push_bind(user)
                .push(")");
        }
    }

    if let Some(search) = &query.search {
        let pattern = like_pattern(search);
        qb.push(" AND (r.title ILIKE ")
            .push_bind(pattern.clone())
            .push(" ESCAPE '\\' OR r.content ILIKE ")
            .push_bind(pattern)
            .push(" ESCAPE '\\')");
    }
}

/// PostgreSQL `LIMIT`/`OFFSET` take a signed bigint.
fn to_sql_bound(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}
