//! No-op `SanitizableWithMapper` implementations for textless types.

use std::{
    cmp::Ordering,
    marker::PhantomData,
    net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr},
    num::{
        NonZeroI8, NonZeroI16, NonZeroI32, NonZeroI64, NonZeroI128, NonZeroIsize, NonZeroU8,
        NonZeroU16, NonZeroU32, NonZeroU64, NonZeroU128, NonZeroUsize,
    },
    time::{Duration, Instant, SystemTime},
};

use super::impl_sanitizable_passthrough;
use crate::{text::TextMapper, traversal::traits::SanitizableWithMapper};

// =============================================================================
// Scalars and primitives
// =============================================================================

impl_sanitizable_passthrough!(bool, char, ());
impl_sanitizable_passthrough!(i8, i16, i32, i64, i128, isize);
impl_sanitizable_passthrough!(u8, u16, u32, u64, u128, usize);
impl_sanitizable_passthrough!(f32, f64);

impl_sanitizable_passthrough!(
    NonZeroI8,
    NonZeroI16,
    NonZeroI32,
    NonZeroI64,
    NonZeroI128,
    NonZeroIsize,
    NonZeroU8,
    NonZeroU16,
    NonZeroU32,
    NonZeroU64,
    NonZeroU128,
    NonZeroUsize,
);

// =============================================================================
// Other std leaves
// =============================================================================

impl_sanitizable_passthrough!(Duration, Instant, SystemTime, Ordering);
impl_sanitizable_passthrough!(IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr);

impl<T: ?Sized> SanitizableWithMapper for PhantomData<T> {
    fn sanitize_with<M: TextMapper + ?Sized>(&mut self, _mapper: &M) {}
}

// =============================================================================
// Date/time and id leaves (feature-gated)
// =============================================================================

#[cfg(feature = "chrono")]
mod chrono_passthrough {
    use chrono::{
        DateTime, Duration, FixedOffset, Local, Month, NaiveDate, NaiveDateTime, NaiveTime, Utc,
        Weekday,
    };

    use super::impl_sanitizable_passthrough;

    impl_sanitizable_passthrough!(DateTime<Utc>, DateTime<Local>, DateTime<FixedOffset>);
    impl_sanitizable_passthrough!(NaiveDateTime, NaiveDate, NaiveTime);
    impl_sanitizable_passthrough!(Duration, Month, Weekday);
}

#[cfg(feature = "time")]
mod time_passthrough {
    use time::{
        Date, Duration, Month, OffsetDateTime, PrimitiveDateTime, Time, UtcOffset, Weekday,
    };

    use super::impl_sanitizable_passthrough;

    impl_sanitizable_passthrough!(OffsetDateTime, PrimitiveDateTime, Date, Time);
    impl_sanitizable_passthrough!(Duration, UtcOffset, Month, Weekday);
}

#[cfg(feature = "uuid")]
mod uuid_passthrough {
    use uuid::Uuid;

    use super::impl_sanitizable_passthrough;

    impl_sanitizable_passthrough!(Uuid);
}
