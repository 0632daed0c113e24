use crate::domain::{Member, value_objects::MemberId};
use crate::ports::member_service::{MemberService as MemberServiceTrait, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

/// Mock implementation of MemberService
///
/// Supports stateful testing by storing registered members.
pub struct MemberService {
    members: Mutex<HashMap<MemberId, Member>>,
}

impl MemberService {
    pub fn new() -> Self {
        Self {
            members: Mutex::new(HashMap::new()),
        }
    }

    /// Register a member for testing purposes
    pub fn add_member(&self, member: Member) {
        self.members
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(member.member_id, member);
    }

    /// Whether no member has been registered
    pub fn is_empty(&self) -> bool {
        self.members
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_empty()
    }
}

impl Default for MemberService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MemberServiceTrait for MemberService {
    /// Look up a registered member
    async fn find_member_by_id(&self, member_id: MemberId) -> Result<Option<Member>> {
        Ok(self
            .members
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&member_id)
            .cloned())
    }
}
