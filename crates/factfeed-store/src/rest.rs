use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde_json::json;
use tracing::debug;

use factfeed_types::{CategoryFilter, Fact, FactId, NewFact, VoteKind};

use crate::FactStore;
use crate::error::StoreError;

/// Client for a PostgREST-style facts service (Supabase and compatible).
///
/// Three request shapes: a filtered ordered select, an insert with
/// `return=representation`, and a stored-procedure call that performs the
/// vote increment in the database.
pub struct RestStore {
    client: Client,
    base_url: String,
    api_key: String,
}

impl RestStore {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            client: Client::new(),
            base_url,
            api_key: api_key.into(),
        }
    }

    fn authed(&self, req: RequestBuilder) -> RequestBuilder {
        req.header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", self.api_key))
    }
}

async fn require_success(resp: Response) -> Result<Response, StoreError> {
    if resp.status().is_success() {
        return Ok(resp);
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    Err(StoreError::Rejected { status, body })
}

/// PostgREST wraps single-row replies in an array; unwrap the first row.
fn first_row(mut rows: Vec<Fact>) -> Result<Fact, StoreError> {
    if rows.is_empty() {
        return Err(StoreError::EmptyReply);
    }
    Ok(rows.swap_remove(0))
}

#[async_trait]
impl FactStore for RestStore {
    async fn list_facts(
        &self,
        filter: &CategoryFilter,
        limit: u32,
    ) -> Result<Vec<Fact>, StoreError> {
        let mut req = self
            .authed(self.client.get(format!("{}/rest/v1/facts", self.base_url)))
            .query(&[("select", "*"), ("order", "votesInteresting.asc")])
            .query(&[("limit", limit)]);

        if let CategoryFilter::Named(name) = filter {
            req = req.query(&[("category", format!("eq.{name}"))]);
        }

        debug!(filter = %filter, limit, "fetching facts");
        let resp = require_success(req.send().await?).await?;
        Ok(resp.json().await?)
    }

    async fn insert_fact(&self, draft: &NewFact) -> Result<Fact, StoreError> {
        debug!(category = %draft.category, "inserting fact");
        let resp = self
            .authed(self.client.post(format!("{}/rest/v1/facts", self.base_url)))
            .header("Prefer", "return=representation")
            .json(std::slice::from_ref(draft))
            .send()
            .await?;

        let rows: Vec<Fact> = require_success(resp).await?.json().await?;
        first_row(rows)
    }

    async fn increment_vote(&self, id: FactId, kind: VoteKind) -> Result<Fact, StoreError> {
        // The increment runs in the database (`increment_vote(fact_id
        // bigint, vote_column text) returns setof facts`), so concurrent
        // votes never race a stale client-side counter value.
        debug!(id, kind = %kind, "incrementing vote");
        let resp = self
            .authed(
                self.client
                    .post(format!("{}/rest/v1/rpc/increment_vote", self.base_url)),
            )
            .json(&json!({ "fact_id": id, "vote_column": kind.column() }))
            .send()
            .await?;

        let rows: Vec<Fact> = require_success(resp).await?.json().await?;
        first_row(rows).map_err(|e| match e {
            StoreError::EmptyReply => StoreError::NotFound(id),
            other => other,
        })
    }
}
