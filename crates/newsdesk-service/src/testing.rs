//! In-process doubles for the service collaborators.
//!
//! Used by this crate's tests and, through the `test-utils` feature, by the
//! API and CLI tests. They follow the same contract as the PostgreSQL
//! repository: soft-deleted rows are invisible, updates refresh the update
//! timestamp, and list queries validate their filter request.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use newsdesk_core::error::AppError;
use newsdesk_core::result::AppResult;
use newsdesk_core::traits::{Repository, UpdateOutcome};
use newsdesk_core::types::{ColumnValue, FilterRequest, Paginated, SortDirection};
use newsdesk_entity::news::{CreateNews, News, UpdateNews};
use newsdesk_integration::postal_code::{Address, PostalCodeLookup, clean_cep};

#[derive(Default)]
struct State {
    rows: Vec<News>,
    next_id: i64,
    clock: Option<DateTime<Utc>>,
}

impl State {
    /// Wall-clock time, nudged forward so consecutive calls strictly increase.
    fn tick(&mut self) -> DateTime<Utc> {
        let now = Utc::now();
        let now = match self.clock {
            Some(last) if now <= last => last + Duration::microseconds(1),
            _ => now,
        };
        self.clock = Some(now);
        now
    }
}

/// A news repository held in memory.
#[derive(Default)]
pub struct InMemoryNewsRepository {
    state: Mutex<State>,
}

impl InMemoryNewsRepository {
    /// An empty repository behind an `Arc`.
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// A repository pre-filled with `(title, description)` items, in order.
    pub fn with_news(items: &[(&str, &str)]) -> Arc<Self> {
        let repo = Self::default();
        {
            let mut state = repo.lock();
            for (title, description) in items {
                insert(
                    &mut state,
                    &CreateNews {
                        title: (*title).to_string(),
                        description: (*description).to_string(),
                        publication_date: None,
                    },
                );
            }
        }
        Arc::new(repo)
    }

    /// Codes of every stored row, deleted ones included, in insertion order.
    pub fn codes(&self) -> Vec<Uuid> {
        self.lock().rows.iter().map(|n| n.code).collect()
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn insert(state: &mut State, input: &CreateNews) -> News {
    state.next_id += 1;
    let now = state.tick();
    let news = News {
        id: state.next_id,
        code: Uuid::new_v4(),
        title: input.title.clone(),
        description: input.description.clone(),
        publication_date: input.publication_date,
        created_at: now,
        updated_at: now,
        deleted_at: None,
    };
    state.rows.push(news.clone());
    news
}

fn sort_key(field: &str) -> AppResult<fn(&News, &News) -> Ordering> {
    let key: fn(&News, &News) -> Ordering = match field {
        "title" => |a, b| a.title.cmp(&b.title),
        "description" => |a, b| a.description.cmp(&b.description),
        "publicationDate" | "publication_date" => |a, b| a.publication_date.cmp(&b.publication_date),
        "creationDate" | "created_at" => |a, b| a.created_at.cmp(&b.created_at),
        "updateDate" | "updated_at" => |a, b| a.updated_at.cmp(&b.updated_at),
        other => return Err(AppError::validation(format!("Cannot order news by '{other}'"))),
    };
    Ok(key)
}

const LOOKUP_FIELDS: &[&str] = &[
    "id",
    "code",
    "title",
    "description",
    "publicationDate",
    "publication_date",
];

fn field_matches(news: &News, field: &str, value: &ColumnValue) -> bool {
    match (field, value) {
        ("id", ColumnValue::Integer(id)) => news.id == *id,
        ("code", ColumnValue::Uuid(code)) => news.code == *code,
        ("title", ColumnValue::Text(title)) => news.title == *title,
        ("description", ColumnValue::Text(text)) => news.description == *text,
        ("publicationDate" | "publication_date", ColumnValue::Null) => news.publication_date.is_none(),
        ("publicationDate" | "publication_date", ColumnValue::Timestamp(at)) => {
            news.publication_date == Some(*at)
        }
        _ => false,
    }
}

#[async_trait]
impl Repository for InMemoryNewsRepository {
    type Entity = News;
    type Id = i64;
    type Create = CreateNews;
    type Update = UpdateNews;

    async fn find_all(&self) -> AppResult<Vec<News>> {
        Ok(self.lock().rows.iter().filter(|n| !n.is_deleted()).cloned().collect())
    }

    async fn find_by_id(&self, id: &i64) -> AppResult<Option<News>> {
        Ok(self
            .lock()
            .rows
            .iter()
            .find(|n| n.id == *id && !n.is_deleted())
            .cloned())
    }

    async fn find_by_id_with_deleted(&self, id: &i64) -> AppResult<Option<News>> {
        Ok(self.lock().rows.iter().find(|n| n.id == *id).cloned())
    }

    async fn create(&self, input: &CreateNews) -> AppResult<News> {
        Ok(insert(&mut self.lock(), input))
    }

    async fn update(&self, id: &i64, changes: &UpdateNews) -> AppResult<UpdateOutcome> {
        let mut state = self.lock();
        let now = state.tick();
        let Some(news) = state
            .rows
            .iter_mut()
            .find(|n| n.id == *id && !n.is_deleted())
        else {
            return Ok(UpdateOutcome::default());
        };

        if let Some(title) = &changes.title {
            news.title = title.clone();
        }
        if let Some(description) = &changes.description {
            news.description = description.clone();
        }
        if let Some(date) = changes.publication_date {
            news.publication_date = Some(date);
        }
        news.updated_at = now;
        Ok(UpdateOutcome { rows_affected: 1 })
    }

    async fn delete(&self, id: &i64) -> AppResult<bool> {
        let mut state = self.lock();
        let before = state.rows.len();
        state.rows.retain(|n| n.id != *id);
        Ok(state.rows.len() < before)
    }

    async fn soft_delete(&self, id: &i64) -> AppResult<bool> {
        let mut state = self.lock();
        let now = state.tick();
        match state.rows.iter_mut().find(|n| n.id == *id && !n.is_deleted()) {
            Some(news) => {
                news.deleted_at = Some(now);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn find_one_by(&self, field: &str, value: ColumnValue) -> AppResult<Option<News>> {
        if !LOOKUP_FIELDS.contains(&field) {
            return Err(AppError::validation(format!("Unknown field '{field}' for news")));
        }
        Ok(self
            .lock()
            .rows
            .iter()
            .find(|n| !n.is_deleted() && field_matches(n, field, &value))
            .cloned())
    }

    async fn find_by_filters(&self, filters: &FilterRequest) -> AppResult<Paginated<News>> {
        filters.validate()?;
        let order = filters.order_by().map(sort_key).transpose()?;
        let term = filters.search_term().map(str::to_lowercase);

        let mut rows: Vec<News> = self
            .lock()
            .rows
            .iter()
            .filter(|n| !n.is_deleted())
            .filter(|n| match &term {
                Some(term) => {
                    n.title.to_lowercase().contains(term)
                        || n.description.to_lowercase().contains(term)
                }
                None => true,
            })
            .cloned()
            .collect();

        rows.sort_by(|a, b| {
            let primary = match order {
                Some(cmp) if filters.direction() == SortDirection::Desc => cmp(b, a),
                Some(cmp) => cmp(a, b),
                None => Ordering::Equal,
            };
            primary.then(a.id.cmp(&b.id))
        });

        let total = rows.len() as u64;
        let offset = usize::try_from(filters.offset()).unwrap_or(usize::MAX);
        let limit = usize::try_from(filters.limit()).unwrap_or(usize::MAX);
        let data = rows.into_iter().skip(offset).take(limit).collect();
        Ok(Paginated::new(data, total, filters))
    }

    async fn delete_all(&self) -> AppResult<u64> {
        let mut state = self.lock();
        let removed = state.rows.len() as u64;
        state.rows.clear();
        Ok(removed)
    }
}

/// A postal-code lookup answering from a fixed table.
#[derive(Debug, Default)]
pub struct StaticPostalCodes {
    addresses: HashMap<String, Address>,
}

impl StaticPostalCodes {
    /// A lookup knowing only `address`, keyed by its digits.
    pub fn with(address: Address) -> Arc<Self> {
        let mut addresses = HashMap::new();
        let key: String = address.cep.chars().filter(char::is_ascii_digit).collect();
        addresses.insert(key, address);
        Arc::new(Self { addresses })
    }

    /// A lookup that knows no address.
    pub fn empty() -> Arc<Self> {
        Arc::new(Self::default())
    }
}

#[async_trait]
impl PostalCodeLookup for StaticPostalCodes {
    async fn lookup(&self, cep: &str) -> AppResult<Address> {
        let cep = clean_cep(cep)?;
        self.addresses
            .get(&cep)
            .cloned()
            .ok_or_else(|| AppError::not_found(format!("Postal code {cep} not found")))
    }
}

/// The address of Praça da Sé, São Paulo.
pub fn sample_address() -> Address {
    Address {
        cep: "01001-000".into(),
        street: "Praça da Sé".into(),
        complement: "lado ímpar".into(),
        district: "Sé".into(),
        city: "São Paulo".into(),
        state: "SP".into(),
        ibge: "3550308".into(),
        gia: "1004".into(),
        area_code: "11".into(),
        siafi: "7107".into(),
    }
}
