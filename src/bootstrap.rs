use chrono::NaiveDate;

use crate::api::state::AppState;
use crate::domain::{Owner, Pet, Speciality, Visit};
use crate::utils::errors::ApiError;

/// Seeds sample specialities, owners, pets and a visit into an empty clinic.
pub async fn load_sample_data(state: &AppState) -> Result<(), ApiError> {
    if !state.owners.find_all().await?.is_empty() {
        log::info!("owners already present, skipping sample data");
        return Ok(());
    }

    for description in ["Radiology", "Surgery", "Dentistry"] {
        state.specialities.save(Speciality::new(description)).await?;
    }

    let michael = state.owners.save(Owner {
        address: "123 Brickerel".to_string(),
        city: "Miami".to_string(),
        telephone: "1231231234".to_string(),
        ..Owner::new("Michael", "Weston")
    }).await?;
    let fiona = state.owners.save(Owner {
        address: "123 Brickerel".to_string(),
        city: "Miami".to_string(),
        telephone: "1231231234".to_string(),
        ..Owner::new("Fiona", "Glenanne")
    }).await?;

    state.pets.save(Pet {
        name: "Rosco".to_string(),
        pet_type: "Dog".to_string(),
        birth_date: NaiveDate::from_ymd_opt(2019, 4, 2),
        owner_id: michael.id,
        ..Default::default()
    }).await?;
    let just_cat = state.pets.save(Pet {
        name: "Just Cat".to_string(),
        pet_type: "Cat".to_string(),
        birth_date: NaiveDate::from_ymd_opt(2020, 9, 14),
        owner_id: fiona.id,
        ..Default::default()
    }).await?;

    state.visits.save(Visit {
        description: "Sneezy Kitty".to_string(),
        pet: Some(just_cat),
        ..Visit::new()
    }).await?;

    log::info!("loaded sample data");
    Ok(())
}
