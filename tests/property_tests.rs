/// Property-based tests using proptest
/// Tests invariants that should hold for all create-pet payloads and
/// pagination parameters.
use pet_sync_api::errors::AppError;
use pet_sync_api::handlers::{contact_display_name, validate_create_pet};
use pet_sync_api::models::{CreatePetRequest, PageParams};
use proptest::prelude::*;

fn bad_request_message(err: AppError) -> String {
    match err {
        AppError::BadRequest(msg) => msg,
        other => panic!("expected BadRequest, got: {}", other),
    }
}

// Property: validation should never panic, whatever the payload
proptest! {
    #[test]
    fn validation_never_panics(
        name in proptest::option::of("\\PC*"),
        age in proptest::option::of(any::<i32>()),
        breed in proptest::option::of("\\PC*"),
        contact_id in proptest::option::of("\\PC*"),
    ) {
        let _ = validate_create_pet(&CreatePetRequest { name, age, breed, contact_id });
    }

    // A fully valid payload passes through unchanged
    #[test]
    fn valid_payload_is_accepted_verbatim(
        name in "[A-Za-z]{1,20}",
        age in 1i32..=30,
        breed in "[A-Za-z]{1,30}",
        contact_id in "[0-9]{5,12}",
    ) {
        let request = CreatePetRequest {
            name: Some(name.clone()),
            age: Some(age),
            breed: Some(breed.clone()),
            contact_id: Some(contact_id.clone()),
        };
        let parsed = validate_create_pet(&request).unwrap();
        prop_assert_eq!(parsed.name, name);
        prop_assert_eq!(parsed.age, age);
        prop_assert_eq!(parsed.breed, breed);
        prop_assert_eq!(parsed.contact_id, contact_id);
    }

    // The name check always fires first, whatever else is present
    #[test]
    fn missing_name_short_circuits(
        age in proptest::option::of(any::<i32>()),
        breed in proptest::option::of("\\PC*"),
        contact_id in proptest::option::of("\\PC*"),
    ) {
        let err = validate_create_pet(&CreatePetRequest {
            name: None,
            age,
            breed,
            contact_id,
        })
        .unwrap_err();
        prop_assert!(bad_request_message(err).starts_with("Name is not provided"));
    }

    // With a valid name, a non-positive age is the next failure
    #[test]
    fn non_positive_age_is_rejected(
        name in "[A-Za-z]{1,20}",
        age in i32::MIN..=0,
        breed in proptest::option::of("\\PC*"),
        contact_id in proptest::option::of("\\PC*"),
    ) {
        let err = validate_create_pet(&CreatePetRequest {
            name: Some(name),
            age: Some(age),
            breed,
            contact_id,
        })
        .unwrap_err();
        prop_assert!(bad_request_message(err).starts_with("Age is not provided"));
    }
}

// Property: the derived display name is firstname plus one lastname token
proptest! {
    #[test]
    fn display_name_never_panics(first in "\\PC*", last in "\\PC*") {
        let _ = contact_display_name(&first, &last);
    }

    #[test]
    fn display_name_keeps_first_lastname_token(
        first in "[A-Za-z]{1,10}",
        last in "[A-Za-z]{1,10}( [A-Za-z]{1,10}){0,3}",
    ) {
        let name = contact_display_name(&first, &last);
        let expected_last = last.split(' ').next().unwrap();
        prop_assert_eq!(name, format!("{} {}", first, expected_last));
    }
}

// Property: pagination parameters always resolve to sane bounds
proptest! {
    #[test]
    fn page_params_stay_in_bounds(
        page in proptest::option::of(any::<u32>()),
        page_size in proptest::option::of(any::<u32>()),
    ) {
        let params = PageParams { page, page_size };
        prop_assert!(params.page() >= 1);
        prop_assert!(params.page_size() >= 1);
        prop_assert!(params.page_size() <= 100);
    }
}
