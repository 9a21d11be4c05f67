//! In-memory trait implementations shared by the gate and service tests.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Mutex;

use uuid::Uuid;

use crate::{
    api::error,
    modules::{
        block::{model::BlockedUserRow, repository::BlockRepository},
        message::{
            model::InsertMessage, repository::MessageRepository, schema::MessageEntity,
        },
        premium::repository::PremiumProvider,
        profile::{repository::ProfileRepository, schema::AllowMessages},
    },
};

pub struct InMemoryMessageRepo {
    rows: Mutex<Vec<MessageEntity>>,
    next_id: AtomicI64,
}

impl InMemoryMessageRepo {
    pub fn new() -> Self {
        Self { rows: Mutex::new(Vec::new()), next_id: AtomicI64::new(1) }
    }

    pub fn snapshot(&self) -> Vec<MessageEntity> {
        self.rows.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl MessageRepository for InMemoryMessageRepo {
    async fn append(
        &self,
        message: &InsertMessage,
    ) -> Result<MessageEntity, error::SystemError> {
        let entity = MessageEntity {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            sender_id: message.sender_id,
            receiver_id: message.receiver_id,
            content: message.content.clone(),
            attachment_url: message.attachment_url.clone(),
            message_type: message.message_type,
            read_status: false,
            deleted_by_sender: false,
            deleted_by_receiver: false,
            created_at: chrono::Utc::now(),
        };
        self.rows.lock().unwrap().push(entity.clone());
        Ok(entity)
    }

    async fn mark_read(&self, id: i64, reader_id: &Uuid) -> Result<bool, error::SystemError> {
        let mut rows = self.rows.lock().unwrap();
        match rows.iter_mut().find(|m| m.id == id && m.receiver_id == *reader_id) {
            Some(m) => {
                m.read_status = true;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn mark_conversation_read(
        &self,
        reader_id: &Uuid,
        peer_id: &Uuid,
    ) -> Result<u64, error::SystemError> {
        let mut rows = self.rows.lock().unwrap();
        let mut updated = 0;
        for m in rows.iter_mut() {
            if m.receiver_id == *reader_id && m.sender_id == *peer_id && !m.read_status {
                m.read_status = true;
                updated += 1;
            }
        }
        Ok(updated)
    }

    async fn soft_delete(
        &self,
        id: i64,
        requester_id: &Uuid,
    ) -> Result<bool, error::SystemError> {
        let mut rows = self.rows.lock().unwrap();
        match rows.iter_mut().find(|m| m.id == id) {
            Some(m) if m.sender_id == *requester_id => {
                m.deleted_by_sender = true;
                Ok(true)
            }
            Some(m) if m.receiver_id == *requester_id => {
                m.deleted_by_receiver = true;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn soft_delete_conversation(
        &self,
        user_id: &Uuid,
        peer_id: &Uuid,
    ) -> Result<(), error::SystemError> {
        let mut rows = self.rows.lock().unwrap();
        for m in rows.iter_mut() {
            if m.sender_id == *user_id && m.receiver_id == *peer_id {
                m.deleted_by_sender = true;
            } else if m.receiver_id == *user_id && m.sender_id == *peer_id {
                m.deleted_by_receiver = true;
            }
        }
        Ok(())
    }

    async fn list_conversation(
        &self,
        user_id: &Uuid,
        peer_id: &Uuid,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<MessageEntity>, error::SystemError> {
        let rows = self.rows.lock().unwrap();
        let mut visible: Vec<MessageEntity> = rows
            .iter()
            .filter(|m| {
                ((m.sender_id == *user_id && m.receiver_id == *peer_id)
                    || (m.sender_id == *peer_id && m.receiver_id == *user_id))
                    && m.is_visible_to(user_id)
            })
            .cloned()
            .collect();
        visible.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(visible.into_iter().skip(offset as usize).take(limit as usize).collect())
    }

    async fn count_conversation(
        &self,
        user_id: &Uuid,
        peer_id: &Uuid,
    ) -> Result<i64, error::SystemError> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .filter(|m| {
                ((m.sender_id == *user_id && m.receiver_id == *peer_id)
                    || (m.sender_id == *peer_id && m.receiver_id == *user_id))
                    && m.is_visible_to(user_id)
            })
            .count() as i64)
    }

    async fn count_sent_since(
        &self,
        sender_id: &Uuid,
        receiver_id: &Uuid,
        since: chrono::DateTime<chrono::Utc>,
    ) -> Result<i64, error::SystemError> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .filter(|m| {
                m.sender_id == *sender_id
                    && m.receiver_id == *receiver_id
                    && m.created_at >= since
            })
            .count() as i64)
    }
}

#[derive(Default, Clone)]
pub struct StaticBlockRepo {
    pairs: Vec<(Uuid, Uuid)>,
}

impl StaticBlockRepo {
    pub fn with_pairs(pairs: Vec<(Uuid, Uuid)>) -> Self {
        Self { pairs }
    }
}

#[async_trait::async_trait]
impl BlockRepository for StaticBlockRepo {
    async fn exists_between(
        &self,
        user_a: &Uuid,
        user_b: &Uuid,
    ) -> Result<bool, error::SystemError> {
        Ok(self
            .pairs
            .iter()
            .any(|(x, y)| (x == user_a && y == user_b) || (x == user_b && y == user_a)))
    }

    async fn related_block_ids(&self, user_id: &Uuid) -> Result<Vec<Uuid>, error::SystemError> {
        Ok(self
            .pairs
            .iter()
            .filter_map(|(x, y)| {
                if x == user_id {
                    Some(*y)
                } else if y == user_id {
                    Some(*x)
                } else {
                    None
                }
            })
            .collect())
    }

    async fn create(&self, _: &Uuid, _: &Uuid) -> Result<(), error::SystemError> {
        Ok(())
    }

    async fn delete(&self, _: &Uuid, _: &Uuid) -> Result<(), error::SystemError> {
        Ok(())
    }

    async fn find_blocked_users(
        &self,
        _: &Uuid,
    ) -> Result<Vec<BlockedUserRow>, error::SystemError> {
        Ok(Vec::new())
    }
}

#[derive(Default, Clone)]
pub struct StaticProfiles {
    settings: HashMap<Uuid, AllowMessages>,
}

impl StaticProfiles {
    pub fn with_setting(user_id: Uuid, setting: AllowMessages) -> Self {
        Self { settings: HashMap::from([(user_id, setting)]) }
    }
}

#[async_trait::async_trait]
impl ProfileRepository for StaticProfiles {
    async fn allow_messages(&self, user_id: &Uuid) -> Result<AllowMessages, error::SystemError> {
        Ok(self.settings.get(user_id).copied().unwrap_or_default())
    }
}

#[derive(Default, Clone)]
pub struct StaticPremium {
    members: HashSet<Uuid>,
}

impl StaticPremium {
    pub fn with_members(members: Vec<Uuid>) -> Self {
        Self { members: members.into_iter().collect() }
    }
}

#[async_trait::async_trait]
impl PremiumProvider for StaticPremium {
    async fn is_premium(&self, user_id: &Uuid) -> Result<bool, error::SystemError> {
        Ok(self.members.contains(user_id))
    }
}
