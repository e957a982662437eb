//! Mock user generation

use crate::core::models::{ConnectionType, User, UserStatus};
use chrono::{DateTime, Duration, Utc};
use rand::Rng;

/// Number of users in the fixture
pub const USER_COUNT: usize = 100;

const HEX: &[u8; 16] = b"0123456789abcdef";

/// Generate [`USER_COUNT`] users relative to `now`.
///
/// First connections fall between 360 and 30 days before `now`; the last
/// connection falls between the first one and `now`.
pub fn generate_users<R: Rng>(rng: &mut R, now: DateTime<Utc>) -> Vec<User> {
    (1..=USER_COUNT)
        .map(|i| {
            let connection_type = ConnectionType::ALL[rng.random_range(0..ConnectionType::ALL.len())];
            let first_connected = random_first_connected(rng, now);
            let last_connected = random_between(rng, first_connected, now);
            let status = if rng.random_bool(0.5) {
                UserStatus::Active
            } else {
                UserStatus::Inactive
            };
            User {
                id: format!("user-{i}"),
                name: format!("User {i}"),
                connection_type,
                identifier: generate_identifier(rng, connection_type),
                first_connected,
                last_connected,
                status,
            }
        })
        .collect()
}

fn generate_identifier<R: Rng>(rng: &mut R, connection_type: ConnectionType) -> String {
    let n: u32 = rng.random_range(0..1000);
    match connection_type {
        ConnectionType::Metamask
        | ConnectionType::Coinbase
        | ConnectionType::Trustwallet
        | ConnectionType::Phantom => {
            let hex: String = (0..40)
                .map(|_| char::from(HEX[rng.random_range(0..HEX.len())]))
                .collect();
            format!("0x{hex}")
        }
        ConnectionType::Google => format!("user{n}@gmail.com"),
        ConnectionType::Facebook => format!("fb/user{n}"),
        ConnectionType::X => format!("@user{n}"),
        ConnectionType::Email => format!("user{n}@example.com"),
    }
}

fn random_first_connected<R: Rng>(rng: &mut R, now: DateTime<Utc>) -> DateTime<Utc> {
    let end = now - Duration::days(30);
    let start = end - Duration::days(11 * 30);
    random_between(rng, start, end)
}

fn random_between<R: Rng>(rng: &mut R, start: DateTime<Utc>, end: DateTime<Utc>) -> DateTime<Utc> {
    let span = (end - start).num_milliseconds().max(0);
    start + Duration::milliseconds(rng.random_range(0..=span))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn generates_hundred_users_with_sequential_ids() {
        let users = generate_users(&mut StdRng::seed_from_u64(1), now());
        assert_eq!(users.len(), USER_COUNT);
        assert_eq!(users[0].id, "user-1");
        assert_eq!(users[99].name, "User 100");
    }

    #[test]
    fn connection_dates_stay_in_bounds() {
        let now = now();
        for user in generate_users(&mut StdRng::seed_from_u64(7), now) {
            assert!(user.first_connected >= now - Duration::days(360));
            assert!(user.first_connected <= now - Duration::days(30));
            assert!(user.last_connected >= user.first_connected);
            assert!(user.last_connected <= now);
        }
    }

    #[test]
    fn identifiers_match_connection_type() {
        for user in generate_users(&mut StdRng::seed_from_u64(3), now()) {
            let id = &user.identifier;
            match user.connection_type {
                ConnectionType::Google => assert!(id.ends_with("@gmail.com")),
                ConnectionType::Facebook => assert!(id.starts_with("fb/user")),
                ConnectionType::X => assert!(id.starts_with("@user")),
                ConnectionType::Email => assert!(id.ends_with("@example.com")),
                _ => {
                    assert!(id.starts_with("0x"));
                    assert_eq!(id.len(), 42);
                }
            }
        }
    }
}
