//! In-Memory Document Store
//!
//! 외부 의존성 없이 동작하는 [`DocumentStore`] 구현체입니다.
//! 테스트와 `DATA_STORE=memory` 로컬 실행에 사용됩니다.
//!
//! 컬렉션별로 삽입 순서를 유지하며, MongoDB 구현과 같은 결과를 내도록
//! 타임스탬프 기록과 참조 채우기 규칙을 동일하게 적용합니다.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, Bson, DateTime, Document};

use crate::core::errors::{AppResult, ErrorContext};
use crate::db::{stamp_new, DocumentStore, Filter, Populate, Update, UPDATED_AT};

/// 프로세스 메모리 기반 문서 저장소
#[derive(Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, Vec<Document>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn has_id(document: &Document, id: &ObjectId) -> bool {
    matches!(document.get("_id"), Some(Bson::ObjectId(value)) if value == id)
}

/// 참조 필드를 대상 문서로 치환합니다. 대상이 없으면 필드를 제거합니다.
fn populate_document(
    mut document: Document,
    populate: &Populate,
    collections: &HashMap<String, Vec<Document>>,
) -> Document {
    let referenced = match document.get(&populate.field) {
        Some(Bson::ObjectId(reference)) => collections
            .get(&populate.from)
            .and_then(|docs| docs.iter().find(|candidate| has_id(candidate, reference)))
            .cloned(),
        _ => None,
    };

    match referenced {
        Some(target) => {
            document.insert(populate.field.clone(), target);
        }
        None => {
            document.remove(&populate.field);
        }
    }
    document
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn find_all(&self, collection: &str) -> AppResult<Vec<Document>> {
        let collections = self.collections.read().context("메모리 저장소 읽기 잠금 실패")?;

        Ok(collections.get(collection).cloned().unwrap_or_default())
    }

    async fn find_by_id(&self, collection: &str, id: &ObjectId) -> AppResult<Option<Document>> {
        let collections = self.collections.read().context("메모리 저장소 읽기 잠금 실패")?;

        Ok(collections
            .get(collection)
            .and_then(|docs| docs.iter().find(|document| has_id(document, id)))
            .cloned())
    }

    async fn find_where(
        &self,
        collection: &str,
        filter: &Filter,
        populate: Option<&Populate>,
    ) -> AppResult<Vec<Document>> {
        let collections = self.collections.read().context("메모리 저장소 읽기 잠금 실패")?;

        let matched = collections
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .filter(|document| filter.matches(document))
                    .cloned()
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default();

        Ok(match populate {
            Some(populate) => matched
                .into_iter()
                .map(|document| populate_document(document, populate, &collections))
                .collect(),
            None => matched,
        })
    }

    async fn create(&self, collection: &str, document: Document) -> AppResult<Document> {
        let document = stamp_new(document);
        let mut collections = self.collections.write().context("메모리 저장소 쓰기 잠금 실패")?;

        collections
            .entry(collection.to_string())
            .or_default()
            .push(document.clone());

        Ok(document)
    }

    async fn update_by_id(
        &self,
        collection: &str,
        id: &ObjectId,
        update: &Update,
    ) -> AppResult<Option<Document>> {
        let mut collections = self.collections.write().context("메모리 저장소 쓰기 잠금 실패")?;

        let Some(document) = collections
            .get_mut(collection)
            .and_then(|docs| docs.iter_mut().find(|document| has_id(document, id)))
        else {
            return Ok(None);
        };

        for (key, value) in update.set.iter() {
            document.insert(key.clone(), value.clone());
        }
        for field in &update.unset {
            document.remove(field);
        }
        document.insert(UPDATED_AT, DateTime::now());

        Ok(Some(document.clone()))
    }

    async fn delete_by_id(&self, collection: &str, id: &ObjectId) -> AppResult<Option<Document>> {
        let mut collections = self.collections.write().context("메모리 저장소 쓰기 잠금 실패")?;

        Ok(collections.get_mut(collection).and_then(|docs| {
            docs.iter()
                .position(|document| has_id(document, id))
                .map(|index| docs.remove(index))
        }))
    }

    async fn ping(&self) -> AppResult<()> {
        self.collections.read().context("메모리 저장소 읽기 잠금 실패")?;
        Ok(())
    }
}
