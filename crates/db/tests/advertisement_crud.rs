//! Integration tests for the advertisement repository.

use std::str::FromStr;

use annos_core::timestamp::parse_timestamp;
use annos_core::types::Price;
use annos_db::models::advertisement::Advertisement;
use annos_db::repositories::AdvertisementRepo;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_advert(name: &str, price: &str) -> Advertisement {
    Advertisement {
        id: 0,
        name: name.to_string(),
        description: format!("{name} description"),
        price: Price::from_str(price).unwrap(),
        date_added: parse_timestamp("2024-01-01").unwrap(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_insert_assigns_id_and_ignores_client_id(pool: PgPool) {
    let mut input = new_advert("Banner", "9.99");
    input.id = 4242;

    let created = AdvertisementRepo::insert(&pool, &input).await.unwrap();
    assert_ne!(created.id, 4242);
    assert!(created.id > 0);
    assert_eq!(created.name, "Banner");
    assert_eq!(created.price, Price::from_str("9.99").unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_find_by_id_and_missing(pool: PgPool) {
    let created = AdvertisementRepo::insert(&pool, &new_advert("Find", "1"))
        .await
        .unwrap();

    let found = AdvertisementRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .expect("row should exist");
    assert_eq!(found, created);

    let missing = AdvertisementRepo::find_by_id(&pool, created.id + 1000)
        .await
        .unwrap();
    assert!(missing.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_is_ordered_by_id(pool: PgPool) {
    for name in ["A", "B", "C"] {
        AdvertisementRepo::insert(&pool, &new_advert(name, "2.50"))
            .await
            .unwrap();
    }

    let all = AdvertisementRepo::list(&pool).await.unwrap();
    let names: Vec<_> = all.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, ["A", "B", "C"]);
    assert!(all.windows(2).all(|w| w[0].id < w[1].id));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_and_delete_report_affected_rows(pool: PgPool) {
    let mut advert = AdvertisementRepo::insert(&pool, &new_advert("Old", "3"))
        .await
        .unwrap();
    advert.name = "New".to_string();

    let updated = AdvertisementRepo::update(&pool, &advert)
        .await
        .unwrap()
        .expect("row exists");
    assert_eq!(updated, advert);
    let reloaded = AdvertisementRepo::find_by_id(&pool, advert.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(reloaded.name, "New");

    assert!(AdvertisementRepo::delete(&pool, advert.id).await.unwrap());
    assert!(!AdvertisementRepo::delete(&pool, advert.id).await.unwrap());
    assert!(AdvertisementRepo::update(&pool, &advert)
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_price_is_stored_with_two_decimal_places(pool: PgPool) {
    let created = AdvertisementRepo::insert(&pool, &new_advert("Round", "1.005"))
        .await
        .unwrap();
    assert_eq!(created.price.scale(), 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_negative_price_is_accepted(pool: PgPool) {
    let created = AdvertisementRepo::insert(&pool, &new_advert("Refund", "-5.00"))
        .await
        .unwrap();
    assert_eq!(created.price, Price::from_str("-5").unwrap());
}
