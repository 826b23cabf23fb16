use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::speciality::{
    model::Speciality, repository::SpecialtyRepository, service::SpecialityService,
};
use crate::utils::errors::ApiError;

/// Speciality service that hands every call straight to its repository.
///
/// One repository call per service call, arguments untouched, results and
/// errors returned as the repository produced them.
pub struct SpecialitySdService {
    repository: Arc<dyn SpecialtyRepository>,
}

impl SpecialitySdService {
    pub fn new(repository: Arc<dyn SpecialtyRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl SpecialityService for SpecialitySdService {

    async fn find_all(&self) -> Result<Vec<Speciality>, ApiError> {
        self.repository.find_all().await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Speciality>, ApiError> {
        self.repository.find_by_id(id).await
    }

    async fn save(&self, speciality: Speciality) -> Result<Option<Speciality>, ApiError> {
        self.repository.save(speciality).await
    }

    async fn delete(&self, speciality: &Speciality) -> Result<(), ApiError> {
        self.repository.delete(speciality).await
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), ApiError> {
        self.repository.delete_by_id(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MockSpecialtyRepository, RepositoryCall};

    fn service_with(repository: &Arc<MockSpecialtyRepository>) -> SpecialitySdService {
        SpecialitySdService::new(repository.clone())
    }

    #[tokio::test]
    async fn test_delete_by_object() {
        let repository = Arc::new(MockSpecialtyRepository::new());
        let service = service_with(&repository);
        let speciality = Speciality::new("surgery");

        service.delete(&speciality).await.unwrap();

        assert_eq!(repository.calls(), vec![RepositoryCall::Delete(speciality)]);
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let repository = Arc::new(MockSpecialtyRepository::new());
        repository.given_find_by_id(1, Speciality::new("radiology"));
        let service = service_with(&repository);

        let found = service.find_by_id(1).await.unwrap();

        assert!(found.is_some());
        assert_eq!(repository.calls(), vec![RepositoryCall::FindById(1)]);
    }

    #[tokio::test]
    async fn test_find_by_id_absent() {
        let repository = Arc::new(MockSpecialtyRepository::new());
        let service = service_with(&repository);

        assert_eq!(service.find_by_id(42).await.unwrap(), None);
        assert_eq!(repository.count(&RepositoryCall::FindById(42)), 1);
    }

    #[tokio::test]
    async fn test_delete_by_id_twice() {
        let repository = Arc::new(MockSpecialtyRepository::new());
        let service = service_with(&repository);

        service.delete_by_id(1).await.unwrap();
        service.delete_by_id(1).await.unwrap();

        let deletes = repository.count(&RepositoryCall::DeleteById(1));
        assert_eq!(deletes, 2);
        assert!(deletes >= 1);
        assert!(deletes <= 5);
        assert_eq!(repository.count(&RepositoryCall::DeleteById(5)), 0);
    }

    #[tokio::test]
    async fn test_find_by_id_error_propagates() {
        let repository = Arc::new(MockSpecialtyRepository::new());
        repository.fail_with(ApiError::InternalServerError("boom".to_string()));
        let service = service_with(&repository);

        let result = service.find_by_id(1).await;

        match result {
            Err(ApiError::InternalServerError(message)) => assert_eq!(message, "boom"),
            other => panic!("expected the repository error, got {:?}", other),
        }
        assert_eq!(repository.calls(), vec![RepositoryCall::FindById(1)]);
    }

    #[tokio::test]
    async fn test_delete_error_propagates() {
        let repository = Arc::new(MockSpecialtyRepository::new());
        repository.fail_with(ApiError::InternalServerError("boom".to_string()));
        let service = service_with(&repository);

        assert!(service.delete(&Speciality::default()).await.is_err());
        assert_eq!(repository.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_save_error_propagates() {
        let repository = Arc::new(MockSpecialtyRepository::new());
        repository.fail_with(ApiError::Conflict("duplicate".to_string()));
        let service = service_with(&repository);

        let result = service.save(Speciality::new("radiology")).await;

        match result {
            Err(ApiError::Conflict(message)) => assert_eq!(message, "duplicate"),
            other => panic!("expected the repository error, got {:?}", other),
        }
        assert_eq!(repository.calls(), vec![RepositoryCall::Save(Speciality::new("radiology"))]);
    }

    #[tokio::test]
    async fn test_delete_by_id_error_propagates() {
        let repository = Arc::new(MockSpecialtyRepository::new());
        repository.fail_with(ApiError::InternalServerError("boom".to_string()));
        let service = service_with(&repository);

        let result = service.delete_by_id(7).await;

        match result {
            Err(ApiError::InternalServerError(message)) => assert_eq!(message, "boom"),
            other => panic!("expected the repository error, got {:?}", other),
        }
        assert_eq!(repository.calls(), vec![RepositoryCall::DeleteById(7)]);
    }

    #[tokio::test]
    async fn test_save_matching_description() {
        let repository = Arc::new(MockSpecialtyRepository::new());
        repository.given_save_matching(
            |speciality| speciality.description == "MATCH_ME",
            Speciality { id: Some(1), description: String::new() },
        );
        let service = service_with(&repository);

        let returned = service.save(Speciality::new("MATCH_ME")).await.unwrap();

        assert_eq!(returned.and_then(|s| s.id), Some(1));
        assert_eq!(repository.calls(), vec![RepositoryCall::Save(Speciality::new("MATCH_ME"))]);
    }

    #[tokio::test]
    async fn test_save_without_match_returns_none() {
        let repository = Arc::new(MockSpecialtyRepository::new());
        repository.given_save_matching(
            |speciality| speciality.description == "MATCH_ME",
            Speciality { id: Some(1), description: String::new() },
        );
        let service = service_with(&repository);

        let returned = service.save(Speciality::new("Not a match")).await.unwrap();

        assert!(returned.is_none());
    }

    #[tokio::test]
    async fn test_find_all_passes_through() {
        let repository = Arc::new(MockSpecialtyRepository::new());
        repository.given_find_by_id(3, Speciality::new("dentistry"));
        let service = service_with(&repository);

        let all = service.find_all().await.unwrap();

        assert_eq!(all.len(), 1);
        assert_eq!(repository.calls(), vec![RepositoryCall::FindAll]);
    }
}
