use crate::models::{Item, User};

/// Service identifier reported by `/` and `/health`.
pub const SERVICE_NAME: &str = "rust-demo-service";

/// The fixed demo user set. Built fresh per call, never mutated, identical
/// on every invocation.
pub fn demo_users() -> Vec<User> {
    vec![
        User {
            id: 1,
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
        },
        User {
            id: 2,
            name: "Bob".to_string(),
            email: "bob@example.com".to_string(),
        },
        User {
            id: 3,
            name: "Charlie".to_string(),
            email: "charlie@example.com".to_string(),
        },
    ]
}

/// The fixed demo item set. Same invariants as `demo_users`.
pub fn demo_items() -> Vec<Item> {
    vec![
        Item {
            id: 1,
            name: "Go Book".to_string(),
            price: 39.99,
        },
        Item {
            id: 2,
            name: "Go Mug".to_string(),
            price: 15.49,
        },
        Item {
            id: 3,
            name: "Go Sticker".to_string(),
            price: 2.99,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_users_are_fixed() {
        let users = demo_users();
        assert_eq!(users.len(), 3);
        assert_eq!(users[0].id, 1);
        assert_eq!(users[0].name, "Alice");
        assert_eq!(users[0].email, "alice@example.com");
        assert_eq!(users[2].name, "Charlie");
    }

    #[test]
    fn test_items_are_fixed() {
        let items = demo_items();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].name, "Go Book");
        assert_eq!(items[0].price, 39.99);
        assert_eq!(items[1].price, 15.49);
        assert_eq!(items[2].price, 2.99);
    }

    #[test]
    fn test_collections_identical_across_calls() {
        assert_eq!(demo_users(), demo_users());
        assert_eq!(demo_items(), demo_items());
    }
}
