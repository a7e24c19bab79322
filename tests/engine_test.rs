// End-to-end checks of the recommendation engine through the public API

use std::io::Cursor;

use kinship::core::{cosine, Error, RatingMatrix, SimilarityCache};
use kinship::processing::{predict, rank, recommend, rmse, Recommender};
use kinship::storage::{parse, LoadOptions};

const RATINGS: &str = "5,3,0,1\n4,0,0,1\n1,1,0,5\n1,0,0,4\n0,1,5,4\n";

fn sample() -> RatingMatrix {
	parse(Cursor::new(RATINGS), &LoadOptions::default()).unwrap()
}

fn close(a: f64, b: f64) -> bool {
	(a - b).abs() < 1e-12
}

#[test]
fn test_similarity_over_co_rated_items() {
	let m = sample();
	let expected = (5.0 * 4.0 + 1.0 * 1.0) / ((25.0f64 + 1.0).sqrt() * (16.0f64 + 1.0).sqrt());
	assert!(close(cosine(m.row(0), m.row(1)), expected));
}

#[test]
fn test_similarity_symmetric_and_bounded() {
	let m = sample();
	let cache = SimilarityCache::build(&m);

	for a in 0..m.users() {
		for b in 0..m.users() {
			let s = cache.get(a, b).unwrap();
			assert!((-1.0..=1.0).contains(&s));
			assert_eq!(s, cache.get(b, a).unwrap());
			assert_eq!(s, cosine(m.row(a), m.row(b)));
		}
	}
}

#[test]
fn test_predict_weighted_average() {
	let m = sample();
	let s0 = 7.0 / 170.0f64.sqrt();
	let s1 = 1.0;
	let s2 = 21.0 / 442.0f64.sqrt();
	let s3 = 1.0;
	let expected = (s0 * 5.0 + s1 * 4.0 + s2 * 1.0 + s3 * 1.0) / (s0 + s1 + s2 + s3);

	assert!(close(predict(&m, 4, 0).unwrap(), expected));
}

#[test]
fn test_recommend_only_unrated_items() {
	let m = sample();
	let recs = recommend(&m, 0, 2).unwrap();

	assert_eq!(recs.len(), 1);
	assert_eq!(recs[0].item, 2);
}

#[test]
fn test_ranking_properties_for_every_user() {
	let m = sample();
	let engine = Recommender::new(&m);

	for user in 0..m.users() {
		let unrated = m.unrated_items(user).unwrap();
		for top_n in 0..=m.items() + 1 {
			let recs = engine.recommend(user, top_n).unwrap();
			assert_eq!(recs.len(), top_n.min(unrated.len()));
			assert!(recs.windows(2).all(|w| w[0].rating >= w[1].rating));
			assert!(recs.iter().all(|r| unrated.contains(&r.item)));
			assert_eq!(recs, recommend(&m, user, top_n).unwrap());
		}
	}
}

#[test]
fn test_rank_is_stable_on_ties() {
	let candidates = [(3, 2.0), (7, 4.0), (1, 2.0), (4, 2.0)]
		.into_iter()
		.map(|(item, rating)| kinship::core::Recommendation { item, rating })
		.collect();

	let items: Vec<usize> = rank(candidates, 10).iter().map(|r| r.item).collect();
	assert_eq!(items, vec![7, 3, 1, 4]);
}

#[test]
fn test_cached_engine_matches_baseline() {
	let m = sample();
	let engine = Recommender::new(&m);

	for user in 0..m.users() {
		for item in 0..m.items() {
			assert_eq!(engine.predict(user, item).unwrap().rating, predict(&m, user, item).unwrap());
		}
	}
}

#[test]
fn test_rmse_identity_and_completion() {
	let m = sample();
	assert_eq!(rmse(&m, &m).unwrap(), 0.0);

	let completed = Recommender::new(&m).complete();
	assert_eq!(completed.rated_count(), m.users() * m.items());
	assert_eq!(rmse(&m, &completed).unwrap(), 0.0);
}

#[test]
fn test_invalid_indices() {
	let m = sample();
	assert!(matches!(predict(&m, 5, 0), Err(Error::InvalidIndex { index: 5, bound: 5, .. })));
	assert!(matches!(predict(&m, 0, 4), Err(Error::InvalidIndex { index: 4, bound: 4, .. })));
	assert!(matches!(recommend(&m, 9, 1), Err(Error::InvalidIndex { .. })));
}

#[test]
fn test_zero_as_rating() {
	let m = parse(Cursor::new("0,2\n1,\n"), &LoadOptions::zero_is_rating()).unwrap();
	assert_eq!(m.get(0, 0), Some(0.0));
	assert_eq!(m.get(1, 1), None);
	assert_eq!(recommend(&m, 1, 5).unwrap().len(), 1);
}
