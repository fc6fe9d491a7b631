use const_format::concatcp;
use horrorshow::{html, helper::doctype, Raw, RenderOnce, Template, TemplateBuffer};
use shared_data::InvitationView;

use crate::decorations::Balloon;

const CALENDAR_ICON: &str = include_str!("../../assets/calendar.svg");
const CLOCK_ICON: &str = include_str!("../../assets/clock.svg");
const MAP_PIN_ICON: &str = include_str!("../../assets/map-pin.svg");
const PARTY_POPPER_ICON: &str = include_str!("../../assets/party-popper.svg");
const USER_ICON: &str = include_str!("../../assets/user.svg");

const STYLE: &str = concatcp!(shared_data::BASE_STYLE, r#"
#backdrop {
	min-height: 100vh;
	background-image: linear-gradient(to bottom right, var(--pink-100), var(--purple-200));
	display: flex;
	align-items: center;
	justify-content: center;
	padding: 16px;
	position: relative;
	overflow: hidden;
}
#balloons {
	position: absolute;
	inset: 0;
	overflow: hidden;
}
.balloon {
	position: absolute;
	opacity: 0.2;
	animation-name: float;
	animation-iteration-count: infinite;
}
.balloon.pink {
	color: var(--pink-500);
}
.balloon.purple {
	color: var(--purple-500);
}
.balloon.large {
	font-size: 36px;
}
.balloon.small {
	font-size: 24px;
}
#card {
	background-color: rgba(255, 255, 255, 0.9);
	backdrop-filter: blur(4px);
	border-radius: 16px;
	box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1), 0 8px 10px -6px rgba(0, 0, 0, 0.1);
	padding: 32px;
	max-width: 448px;
	width: 100%;
	position: relative;
}
.corner {
	position: absolute;
	width: 48px;
	height: 48px;
	border-radius: 50%;
	display: flex;
	align-items: center;
	justify-content: center;
}
#corner-top-left {
	top: -24px;
	left: -24px;
	background-color: var(--pink-200);
	rotate: 12deg;
}
#corner-top-right {
	top: -24px;
	right: -24px;
	background-color: var(--purple-200);
	rotate: -12deg;
}
#corner-bottom-left {
	bottom: -24px;
	left: -24px;
	background-color: var(--purple-200);
	rotate: 45deg;
}
#corner-bottom-right {
	bottom: -24px;
	right: -24px;
	background-color: var(--pink-200);
	rotate: -45deg;
}
#intro {
	text-align: center;
	display: flex;
	flex-direction: column;
	gap: 24px;
}
#popper {
	display: flex;
	justify-content: center;
	transition: transform 0.15s;
}
#popper:hover, #headline:hover {
	transform: scale(1.1);
}
#popper svg {
	width: 64px;
	height: 64px;
	color: var(--pink-500);
}
#celebrants {
	display: flex;
	justify-content: center;
	gap: 16px;
	margin-top: -8px;
}
#celebrants img {
	width: 128px;
	height: 128px;
	object-fit: cover;
	transition: transform 0.15s;
}
#celebrants img:hover {
	transform: scale(1.05);
}
.row {
	display: flex;
	align-items: center;
	gap: 16px;
	padding: 16px;
	background-image: linear-gradient(to right, var(--pink-50), var(--purple-50));
	border-radius: 8px;
	text-align: start;
	transition: box-shadow 0.15s, transform 0.15s;
}
.row:hover {
	box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.1);
}
.row svg {
	width: 24px;
	height: 24px;
	flex-shrink: 0;
	color: var(--pink-500);
}
.fancy {
	background-image: linear-gradient(to right, var(--pink-600), var(--purple-600));
	background-clip: text;
	-webkit-background-clip: text;
	color: transparent;
}
#greeting {
	font-size: 20px;
	font-weight: 500;
}
#headline {
	transition: transform 0.15s;
}
#headline h1 {
	font-size: 36px;
	font-weight: 700;
	color: var(--gray-800);
	margin-bottom: 8px;
}
#headline p {
	font-size: 24px;
	font-weight: 600;
}
#join-us {
	color: var(--gray-600);
	font-size: 18px;
}
#details {
	margin-top: 32px;
	display: flex;
	flex-direction: column;
	gap: 24px;
}
#details .row:hover {
	transform: translateY(-4px);
}
.detail-label {
	font-size: 14px;
	color: var(--gray-500);
}
.detail-value {
	color: var(--gray-800);
	font-weight: 500;
}
#sign-off {
	margin-top: 32px;
	text-align: center;
	color: var(--gray-600);
	font-style: italic;
}
"#);

#[derive(thiserror::Error, Debug)]
#[error("couldn't render invitation page: {0}")]
pub struct RenderError(#[from] horrorshow::Error);

/// Renders the whole invitation document. Same view and same balloons means the same bytes.
pub fn render(view: &InvitationView, balloons: &[Balloon]) -> Result<String, RenderError> {
	InvitationPage { view, balloons }
		.into_string()
		.map_err(RenderError::from)
}

struct InvitationPage<'a> {
	view: &'a InvitationView,
	balloons: &'a [Balloon]
}

impl RenderOnce for InvitationPage<'_> {
	fn render_once(self, tmpl: &mut TemplateBuffer) {
		let view = self.view;
		let details = [
			(CALENDAR_ICON, "Date", view.date()),
			(CLOCK_ICON, "Time", view.time()),
			(MAP_PIN_ICON, "Location", view.location()),
		];

		tmpl << html! {
			: doctype::HTML;
			html(lang = "en") {
				head {
					meta(charset = "utf-8");
					meta(name = "viewport", content = "width=device-width, initial-scale=1");
					title : format!("{}'s Birthday Invitation", view.celebrant_name());
					style : Raw(STYLE);
				}
				body {
					div(id = "backdrop") {
						div(id = "balloons") {
							@ for balloon in self.balloons {
								div(
									class = format_args!("balloon {} {}", balloon.tint.class(), balloon.size.class()),
									style = format_args!(
										"left: {:.2}%; top: {:.2}%; animation-duration: {:.2}s; animation-delay: {:.2}s;",
										balloon.left_pct, balloon.top_pct, balloon.duration_secs, balloon.delay_secs
									)
								) : "🎈";
							}
						}
						div(id = "card") {
							div(id = "corner-top-left", class = "corner") : "🎉";
							div(id = "corner-top-right", class = "corner") : "🎂";

							div(id = "intro") {
								div(id = "popper") : Raw(PARTY_POPPER_ICON);
								div(id = "celebrants") {
									img(src = "/images/bHour.png", alt = "Celebrant with orange party hat");
									img(src = "/images/bHour1.png", alt = "Celebrant with pink party hat");
								}
								div(class = "row") {
									: Raw(USER_ICON);
									p(id = "greeting", class = "fancy") : view.attendee_greeting();
								}
								div(id = "headline") {
									h1 : "You're Invited!";
									p(class = "fancy") : format!("To {}'s Birthday", view.celebrant_name());
								}
								p(id = "join-us") : "Join us in celebrating this special day!";
							}

							div(id = "details") {
								@ for (icon, label, value) in details {
									div(class = "row") {
										: Raw(icon);
										div {
											p(class = "detail-label") : label;
											p(class = "detail-value") : value;
										}
									}
								}
							}

							p(id = "sign-off") : "\"Let's make this birthday unforgettable!\"";

							div(id = "corner-bottom-left", class = "corner") : "🎁";
							div(id = "corner-bottom-right", class = "corner") : "✨";
						}
					}
				}
			}
		};
	}
}
