//! Recording test doubles for the service and web-tier collaborators.
//!
//! Each double keeps an ordered log of what it was asked, so tests can
//! capture arguments, count calls and check the order across collaborators.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::owner::service::OwnerService;
use crate::domain::pet::service::PetService;
use crate::domain::speciality::repository::SpecialtyRepository;
use crate::domain::visit::service::VisitService;
use crate::domain::web::{BindingResult, FieldError, Model, ModelAttribute};
use crate::domain::{Owner, Pet, Speciality, Visit};
use crate::services::map::PetMapService;
use crate::utils::errors::ApiError;

/// Interaction log shared between doubles, in call order.
pub type InteractionLog = Arc<Mutex<Vec<String>>>;

pub fn interaction_log() -> InteractionLog {
    Arc::new(Mutex::new(Vec::new()))
}

// ============================================================================
// OWNER SERVICE
// ============================================================================

/// Owner service answering a fixed set of search patterns.
///
/// `%Buck%` finds one owner, `%FindMe%` two, `%DontFindMe%` none. Any other
/// pattern is test misuse and fails with `InvalidData`.
pub struct StubOwnerService {
    log: InteractionLog,
    patterns: Mutex<Vec<String>>,
    saved: Mutex<Vec<Owner>>,
    save_result: Mutex<Option<Owner>>,
}

impl StubOwnerService {
    pub fn new(log: InteractionLog) -> Self {
        StubOwnerService {
            log,
            patterns: Mutex::new(Vec::new()),
            saved: Mutex::new(Vec::new()),
            save_result: Mutex::new(None),
        }
    }

    /// Makes `save` answer `owner` instead of echoing its argument.
    pub fn given_save_returns(&self, owner: Owner) {
        *self.save_result.lock().unwrap() = Some(owner);
    }

    /// Last pattern passed to `find_all_by_last_name_like`.
    pub fn captured_pattern(&self) -> Option<String> {
        self.patterns.lock().unwrap().last().cloned()
    }

    pub fn search_count(&self) -> usize {
        self.patterns.lock().unwrap().len()
    }

    pub fn saved(&self) -> Vec<Owner> {
        self.saved.lock().unwrap().clone()
    }

    fn record(&self, call: &str) {
        self.log.lock().unwrap().push(format!("owner_service.{}", call));
    }
}

#[async_trait]
impl OwnerService for StubOwnerService {

    async fn find_all(&self) -> Result<Vec<Owner>, ApiError> {
        self.record("find_all");
        Ok(Vec::new())
    }

    async fn find_by_id(&self, _id: i64) -> Result<Option<Owner>, ApiError> {
        self.record("find_by_id");
        Ok(None)
    }

    async fn find_by_last_name(&self, _last_name: &str) -> Result<Option<Owner>, ApiError> {
        self.record("find_by_last_name");
        Ok(None)
    }

    async fn find_all_by_last_name_like(&self, pattern: &str) -> Result<Vec<Owner>, ApiError> {
        self.record("find_all_by_last_name_like");
        self.patterns.lock().unwrap().push(pattern.to_string());

        match pattern {
            "%Buck%" => Ok(vec![Owner::with_id(1, "Joe", "Buck")]),
            "%DontFindMe%" => Ok(Vec::new()),
            "%FindMe%" => Ok(vec![
                Owner::with_id(1, "Joe", "Buck"),
                Owner::with_id(1, "Pete", "Boggs"),
            ]),
            _ => Err(ApiError::InvalidData("Invalid Argument".to_string())),
        }
    }

    async fn save(&self, owner: Owner) -> Result<Owner, ApiError> {
        self.record("save");
        self.saved.lock().unwrap().push(owner.clone());
        Ok(self.save_result.lock().unwrap().clone().unwrap_or(owner))
    }

    async fn delete_by_id(&self, _id: i64) -> Result<(), ApiError> {
        self.record("delete_by_id");
        Ok(())
    }
}

// ============================================================================
// WEB TIER
// ============================================================================

pub struct RecordingModel {
    log: InteractionLog,
    pub attributes: Vec<(String, ModelAttribute)>,
}

impl RecordingModel {
    pub fn new(log: InteractionLog) -> Self {
        RecordingModel { log, attributes: Vec::new() }
    }
}

impl Model for RecordingModel {
    fn add_attribute(&mut self, key: &str, value: ModelAttribute) {
        self.log.lock().unwrap().push(format!("model.add_attribute({})", key));
        self.attributes.push((key.to_string(), value));
    }
}

#[derive(Default)]
pub struct StubBindingResult {
    errors: bool,
    pub rejections: Vec<FieldError>,
}

impl StubBindingResult {
    pub fn with_errors(errors: bool) -> Self {
        StubBindingResult { errors, rejections: Vec::new() }
    }
}

impl BindingResult for StubBindingResult {
    fn has_errors(&self) -> bool {
        self.errors
    }

    fn reject_value(&mut self, field: &str, code: &str, message: &str) {
        self.rejections.push(FieldError {
            field: field.to_string(),
            code: code.to_string(),
            message: message.to_string(),
        });
    }
}

// ============================================================================
// PET SERVICE SPY
// ============================================================================

/// Wraps a real [`PetMapService`]; `find_by_id` can be overridden.
pub struct SpyPetService {
    inner: PetMapService,
    find_by_id_calls: Mutex<Vec<i64>>,
    find_by_id_override: Mutex<Option<Option<Pet>>>,
}

impl SpyPetService {
    pub fn new() -> Self {
        SpyPetService {
            inner: PetMapService::new(),
            find_by_id_calls: Mutex::new(Vec::new()),
            find_by_id_override: Mutex::new(None),
        }
    }

    /// Every `find_by_id` answers `pet`, whatever the id.
    pub fn given_find_by_id_returns(&self, pet: Option<Pet>) {
        *self.find_by_id_override.lock().unwrap() = Some(pet);
    }

    pub fn find_by_id_calls(&self) -> Vec<i64> {
        self.find_by_id_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl PetService for SpyPetService {

    async fn find_all(&self) -> Result<Vec<Pet>, ApiError> {
        self.inner.find_all().await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Pet>, ApiError> {
        self.find_by_id_calls.lock().unwrap().push(id);
        let stubbed = self.find_by_id_override.lock().unwrap().clone();
        match stubbed {
            Some(pet) => Ok(pet),
            None => self.inner.find_by_id(id).await,
        }
    }

    async fn save(&self, pet: Pet) -> Result<Pet, ApiError> {
        self.inner.save(pet).await
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), ApiError> {
        self.inner.delete_by_id(id).await
    }
}

// ============================================================================
// VISIT SERVICE
// ============================================================================

#[derive(Default)]
pub struct RecordingVisitService {
    saved: Mutex<Vec<Visit>>,
}

impl RecordingVisitService {
    pub fn saved(&self) -> Vec<Visit> {
        self.saved.lock().unwrap().clone()
    }
}

#[async_trait]
impl VisitService for RecordingVisitService {

    async fn find_all(&self) -> Result<Vec<Visit>, ApiError> {
        Ok(self.saved())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Visit>, ApiError> {
        Ok(self.saved().into_iter().find(|v| v.id == Some(id)))
    }

    async fn save(&self, mut visit: Visit) -> Result<Visit, ApiError> {
        let mut saved = self.saved.lock().unwrap();
        visit.id = Some(saved.len() as i64 + 1);
        saved.push(visit.clone());
        Ok(visit)
    }
}

// ============================================================================
// SPECIALITY REPOSITORY
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum RepositoryCall {
    FindAll,
    FindById(i64),
    Save(Speciality),
    Delete(Speciality),
    DeleteById(i64),
}

type SaveMatcher = Box<dyn Fn(&Speciality) -> bool + Send + Sync>;

/// Speciality repository that records calls and answers from stubs.
///
/// Unstubbed lookups answer `None`; a `save` whose argument the matcher
/// rejects answers `None` too.
#[derive(Default)]
pub struct MockSpecialtyRepository {
    calls: Mutex<Vec<RepositoryCall>>,
    known: Mutex<BTreeMap<i64, Speciality>>,
    save_stub: Mutex<Option<(SaveMatcher, Speciality)>>,
    failure: Mutex<Option<ApiError>>,
}

impl MockSpecialtyRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn given_find_by_id(&self, id: i64, speciality: Speciality) {
        self.known.lock().unwrap().insert(id, speciality);
    }

    pub fn given_save_matching<F>(&self, matcher: F, returned: Speciality)
    where
        F: Fn(&Speciality) -> bool + Send + Sync + 'static,
    {
        *self.save_stub.lock().unwrap() = Some((Box::new(matcher), returned));
    }

    /// Every subsequent call is recorded, then fails with `error`.
    pub fn fail_with(&self, error: ApiError) {
        *self.failure.lock().unwrap() = Some(error);
    }

    pub fn calls(&self) -> Vec<RepositoryCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, call: &RepositoryCall) -> usize {
        self.calls.lock().unwrap().iter().filter(|c| *c == call).count()
    }

    fn record(&self, call: RepositoryCall) -> Result<(), ApiError> {
        self.calls.lock().unwrap().push(call);
        match self.failure.lock().unwrap().clone() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl SpecialtyRepository for MockSpecialtyRepository {

    async fn find_all(&self) -> Result<Vec<Speciality>, ApiError> {
        self.record(RepositoryCall::FindAll)?;
        Ok(self.known.lock().unwrap().values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Speciality>, ApiError> {
        self.record(RepositoryCall::FindById(id))?;
        Ok(self.known.lock().unwrap().get(&id).cloned())
    }

    async fn save(&self, speciality: Speciality) -> Result<Option<Speciality>, ApiError> {
        self.record(RepositoryCall::Save(speciality.clone()))?;
        let stub = self.save_stub.lock().unwrap();
        Ok(stub
            .as_ref()
            .filter(|(matcher, _)| matcher(&speciality))
            .map(|(_, returned)| returned.clone()))
    }

    async fn delete(&self, speciality: &Speciality) -> Result<(), ApiError> {
        self.record(RepositoryCall::Delete(speciality.clone()))
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), ApiError> {
        self.record(RepositoryCall::DeleteById(id))
    }
}
