mod decode;
mod invitation;

pub use decode::{decode_attendee_name, DecodingError};
pub use invitation::{resolve, EventDetails, InvitationView, GUEST_GREETING};

pub const BASE_STYLE: &str = r#"
* {
	--pink-50: #fdf2f8;
	--pink-100: #fce7f3;
	--pink-200: #fbcfe8;
	--pink-500: #ec4899;
	--pink-600: #db2777;
	--purple-50: #faf5ff;
	--purple-200: #e9d5ff;
	--purple-500: #a855f7;
	--purple-600: #9333ea;
	--gray-500: #6b7280;
	--gray-600: #4b5563;
	--gray-800: #1f2937;
	box-sizing: border-box;
	font-family: ui-sans-serif, system-ui, sans-serif;
}
body {
	margin: 0;
}
h1, p {
	margin: 0;
}
@keyframes float {
	0%, 100% {
		transform: translateY(0) rotate(0deg);
	}
	50% {
		transform: translateY(-20px) rotate(5deg);
	}
}
"#;
