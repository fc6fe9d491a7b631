use crate::decode::decode_attendee_name;

pub const GUEST_GREETING: &str = "Dear Guest";
const GREETING_PREFIX: &str = "Dear ";

/// The parts of the invitation that don't depend on who's looking at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventDetails {
	pub celebrant_name: &'static str,
	pub date: &'static str,
	pub time: &'static str,
	pub location: &'static str,
}

impl EventDetails {
	pub const BIRTHDAY: Self = Self {
		celebrant_name: "Song ThaiHour",
		date: "March 31, 2025",
		time: "8:00 PM",
		location: "Top Afterwork",
	};
}

/// Everything the page needs, already decided. Only [`resolve`] builds these, so the greeting is
/// never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvitationView {
	attendee_greeting: String,
	details: EventDetails,
}

impl InvitationView {
	#[must_use]
	pub fn attendee_greeting(&self) -> &str {
		&self.attendee_greeting
	}

	#[must_use]
	pub fn celebrant_name(&self) -> &'static str {
		self.details.celebrant_name
	}

	#[must_use]
	pub fn date(&self) -> &'static str {
		self.details.date
	}

	#[must_use]
	pub fn time(&self) -> &'static str {
		self.details.time
	}

	#[must_use]
	pub fn location(&self) -> &'static str {
		self.details.location
	}
}

/// Builds the view for whatever was in the attendee segment of the url. `raw` is expected to still
/// be percent-encoded.
#[must_use]
pub fn resolve(raw: Option<&str>) -> InvitationView {
	let attendee_greeting = match raw.filter(|r| !r.trim().is_empty()) {
		None => GUEST_GREETING.to_string(),
		Some(raw) => match decode_attendee_name(raw) {
			Ok(name) => format!("{GREETING_PREFIX}{name}"),
			// a weird link shouldn't keep anyone from seeing the invite
			Err(e) => {
				tracing::warn!("Couldn't decode attendee name {raw:?} ({e}); greeting them as a guest");
				GUEST_GREETING.to_string()
			}
		}
	};

	InvitationView {
		attendee_greeting,
		details: EventDetails::BIRTHDAY,
	}
}
