use serde::{Deserialize, Serialize};

/// Macro to generate a fieldless enum with an `as_str` + `Display` pair
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

str_enum!(EntityKind {
    Patient => "Patient",
    Doctor => "Doctor",
    Appointment => "Appointment",
});

// Derived at read time only; never persisted.
str_enum!(AppointmentStatus {
    Completed => "Completed",
    Today => "Today",
    Upcoming => "Upcoming",
});
