use crate::db::Tables;
use crate::models::{Rating, Store, User, UserRole};

const DEMO_PASSWORD: &str = "Password!1";

/// The dataset the application boots with. Fixed ids keep demo logins and
/// dashboards predictable.
pub fn demo_tables() -> Tables {
    let users = vec![
        user(
            "admin-1",
            "System Administrator User",
            "admin@storly.com",
            "1 Admin Way, Suite 100, Adminville, AD 12345",
            UserRole::Admin,
            None,
        ),
        user(
            "user-1",
            "Alice Liddell Wonderland",
            "alice@test.com",
            "123 Rabbit Hole, Wonderland, WL 54321",
            UserRole::NormalUser,
            None,
        ),
        user(
            "user-2",
            "Robert \"Bob\" The Builder",
            "bob@test.com",
            "456 Construction Rd, Builderville, BV 67890",
            UserRole::NormalUser,
            None,
        ),
        user(
            "owner-1",
            "Charles \"Charlie\" Bucket",
            "charlie@store.com",
            "789 Factory Lane, Candytown, CT 09876",
            UserRole::StoreOwner,
            Some("store-1"),
        ),
        user(
            "owner-2",
            "Diana Prince of Themyscira",
            "diana@store.com",
            "1 Paradise Island, Themyscira, TH 11223",
            UserRole::StoreOwner,
            Some("store-2"),
        ),
        user(
            "owner-3",
            "Gerald \"Gerry\" Goodman",
            "gerry@store.com",
            "100 Main Street, Metropolis, MT 33445",
            UserRole::StoreOwner,
            Some("store-3"),
        ),
    ];

    let stores = vec![
        store(
            "store-1",
            "Charlie's Candy Corner",
            "contact@charlies.com",
            "1 Candy Street, Candytown, CT 09876",
            "owner-1",
        ),
        store(
            "store-2",
            "Diana's Designer Boutique",
            "support@dianas.com",
            "2 Fashion Avenue, Metropolis, MT 33445",
            "owner-2",
        ),
        store(
            "store-3",
            "Goodman's General Goods",
            "info@goodmans.com",
            "99 Market Square, Metropolis, MT 33445",
            "owner-3",
        ),
    ];

    let ratings = vec![
        rating("rating-1", "store-1", "user-1", 5),
        rating("rating-2", "store-1", "user-2", 4),
        rating("rating-3", "store-2", "user-1", 3),
        rating("rating-4", "store-3", "user-2", 5),
    ];

    Tables {
        users,
        stores,
        ratings,
    }
}

fn user(
    id: &str,
    name: &str,
    email: &str,
    address: &str,
    role: UserRole,
    store_id: Option<&str>,
) -> User {
    User {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        address: address.to_string(),
        role,
        password: DEMO_PASSWORD.to_string(),
        store_id: store_id.map(str::to_string),
    }
}

fn store(id: &str, name: &str, email: &str, address: &str, owner_id: &str) -> Store {
    Store {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        address: address.to_string(),
        owner_id: owner_id.to_string(),
    }
}

fn rating(id: &str, store_id: &str, user_id: &str, value: u8) -> Rating {
    Rating {
        id: id.to_string(),
        store_id: store_id.to_string(),
        user_id: user_id.to_string(),
        rating: value,
    }
}
