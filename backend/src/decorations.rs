use rand::Rng;

/// How the floating balloons behind the card get scattered. The defaults are what the page uses;
/// everything here is cosmetic.
#[derive(Debug, Clone, PartialEq)]
pub struct BalloonConfig {
	pub count: usize,
	pub min_duration_secs: f32,
	pub duration_spread_secs: f32,
	pub max_delay_secs: f32,
}

impl Default for BalloonConfig {
	fn default() -> Self {
		Self {
			count: 20,
			min_duration_secs: 5.0,
			duration_spread_secs: 5.0,
			max_delay_secs: 5.0,
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tint {
	Pink,
	Purple,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalloonSize {
	Large,
	Small,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Balloon {
	pub left_pct: f32,
	pub top_pct: f32,
	pub duration_secs: f32,
	pub delay_secs: f32,
	pub tint: Tint,
	pub size: BalloonSize,
}

impl Tint {
	#[must_use]
	pub fn class(self) -> &'static str {
		match self {
			Self::Pink => "pink",
			Self::Purple => "purple",
		}
	}
}

impl BalloonSize {
	#[must_use]
	pub fn class(self) -> &'static str {
		match self {
			Self::Large => "large",
			Self::Small => "small",
		}
	}
}

impl BalloonConfig {
	pub fn scatter<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Balloon> {
		(0..self.count)
			.map(|idx| Balloon {
				// gen::<f32>() is [0, 1)
				left_pct: rng.gen::<f32>() * 100.0,
				top_pct: rng.gen::<f32>() * 100.0,
				duration_secs: self.min_duration_secs + rng.gen::<f32>() * self.duration_spread_secs,
				delay_secs: rng.gen::<f32>() * self.max_delay_secs,
				tint: if idx % 2 == 0 { Tint::Pink } else { Tint::Purple },
				size: if idx % 3 == 0 { BalloonSize::Large } else { BalloonSize::Small },
			})
			.collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::{rngs::StdRng, SeedableRng};

	#[test]
	fn scatters_the_configured_count() {
		let mut rng = StdRng::seed_from_u64(7);
		assert_eq!(BalloonConfig::default().scatter(&mut rng).len(), 20);

		let none = BalloonConfig { count: 0, ..BalloonConfig::default() };
		assert!(none.scatter(&mut rng).is_empty());
	}

	#[test]
	fn values_stay_in_range() {
		let config = BalloonConfig::default();
		let mut rng = StdRng::seed_from_u64(1234);

		for balloon in config.scatter(&mut rng) {
			assert!((0.0..100.0).contains(&balloon.left_pct));
			assert!((0.0..100.0).contains(&balloon.top_pct));
			assert!((5.0..10.0).contains(&balloon.duration_secs));
			assert!((0.0..5.0).contains(&balloon.delay_secs));
		}
	}

	#[test]
	fn tint_and_size_follow_the_index() {
		let mut rng = StdRng::seed_from_u64(99);
		let balloons = BalloonConfig { count: 7, ..BalloonConfig::default() }.scatter(&mut rng);

		let tints = balloons.iter().map(|b| b.tint).collect::<Vec<_>>();
		assert_eq!(tints, [Tint::Pink, Tint::Purple, Tint::Pink, Tint::Purple, Tint::Pink, Tint::Purple, Tint::Pink]);

		let large = balloons.iter()
			.enumerate()
			.filter(|(_, b)| b.size == BalloonSize::Large)
			.map(|(idx, _)| idx)
			.collect::<Vec<_>>();
		assert_eq!(large, [0, 3, 6]);
	}

	#[test]
	fn same_seed_same_layout() {
		let config = BalloonConfig::default();
		let first = config.scatter(&mut StdRng::seed_from_u64(5));
		let second = config.scatter(&mut StdRng::seed_from_u64(5));
		assert_eq!(first, second);
	}
}
