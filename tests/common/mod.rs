// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use finledger::application::LedgerService;
use finledger::domain::Clock;

/// A clock the test can move forward between operations.
pub struct AdjustableClock(Mutex<DateTime<Utc>>);

impl AdjustableClock {
    pub fn starting_at(instant: DateTime<Utc>) -> Arc<Self> {
        Arc::new(Self(Mutex::new(instant)))
    }

    pub fn set(&self, instant: DateTime<Utc>) {
        *self.0.lock().unwrap() = instant;
    }
}

impl Clock for AdjustableClock {
    fn now(&self) -> DateTime<Utc> {
        *self.0.lock().unwrap()
    }
}

/// Helper to create a service on the wall clock.
pub fn test_service() -> LedgerService {
    LedgerService::new()
}

/// Helper to create a service plus a clock handle the test controls.
pub fn test_service_with_clock(start: DateTime<Utc>) -> (LedgerService, Arc<AdjustableClock>) {
    let clock = AdjustableClock::starting_at(start);
    let service = LedgerService::with_clock(clock.clone());
    (service, clock)
}

/// An instant on the given local calendar day, expressed in UTC.
/// Day-granularity filtering happens in local time, so fixtures are
/// built from local wall-clock components.
pub fn local_instant(y: i32, m: u32, d: u32, hour: u32) -> DateTime<Utc> {
    Local
        .with_ymd_and_hms(y, m, d, hour, 0, 0)
        .unwrap()
        .with_timezone(&Utc)
}

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Test fixture: standard account setup
pub struct StandardAccounts;

impl StandardAccounts {
    pub const ANA_CPF: &'static str = "11111111111";
    pub const BOB_CPF: &'static str = "22222222222";

    pub fn create_basic(service: &LedgerService) {
        service
            .create_account(Self::ANA_CPF, "Ana")
            .expect("create Ana");
        service
            .create_account(Self::BOB_CPF, "Bob")
            .expect("create Bob");
    }
}
