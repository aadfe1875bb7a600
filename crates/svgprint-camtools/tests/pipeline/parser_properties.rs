use proptest::prelude::*;
use svgprint_camtools::svg_path::{parse, tokenize};
use svgprint_camtools::normalize;
use svgprint_core::{BoundingBox, Path, Waypoint};

fn command() -> impl Strategy<Value = String> {
    let letter = prop::sample::select(vec![
        'M', 'm', 'L', 'l', 'H', 'h', 'V', 'v', 'C', 'c', 'S', 's', 'Q', 'q', 'T', 't', 'A',
        'a', 'Z', 'z',
    ]);
    let params = prop::collection::vec(-500.0f64..500.0, 0..9);
    (letter, params).prop_map(|(letter, params)| {
        let numbers: Vec<String> = params.iter().map(|p| p.to_string()).collect();
        format!("{} {}", letter, numbers.join(","))
    })
}

fn path_data() -> impl Strategy<Value = String> {
    prop::collection::vec(command(), 0..12).prop_map(|cmds| cmds.join(" "))
}

fn outline() -> impl Strategy<Value = Path> {
    prop::collection::vec((-1000.0f64..1000.0, -1000.0f64..1000.0), 2..20).prop_map(|points| {
        points
            .iter()
            .enumerate()
            .map(|(i, &(x, y))| {
                if i == 0 {
                    Waypoint::move_to(x, y)
                } else {
                    Waypoint::line_to(x, y)
                }
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn parse_never_exceeds_parameter_groups(data in path_data()) {
        let commands = tokenize(&data);
        let groups: usize = commands.iter().map(|c| c.complete_groups()).sum();
        let closes = commands
            .iter()
            .filter(|c| c.letter.eq_ignore_ascii_case(&'z'))
            .count();
        let path = parse(&data);
        prop_assert!(path.len() <= groups + closes);
    }

    #[test]
    fn parse_tolerates_arbitrary_text(data in ".{0,64}") {
        let _ = parse(&data);
    }

    #[test]
    fn close_twice_adds_at_most_one(data in path_data()) {
        let once = parse(&format!("{} Z", data));
        let twice = parse(&format!("{} Z Z", data));
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn normalized_longest_side_matches_target(
        paths in prop::collection::vec(outline(), 1..4),
        target in 1.0f64..500.0,
    ) {
        let bounds = BoundingBox::from_paths(&paths).unwrap();
        prop_assume!(bounds.width() > 1e-6 && bounds.height() > 1e-6);

        let out = normalize(&paths, target);
        let after = BoundingBox::from_paths(&out).unwrap();
        prop_assert!((after.longest_side() - target).abs() < 1e-6 * target);
        prop_assert!(after.min_x.abs() < 1e-9 && after.min_y.abs() < 1e-9);

        let before_ratio = bounds.width() / bounds.height();
        let after_ratio = after.width() / after.height();
        prop_assert!((before_ratio - after_ratio).abs() <= 1e-6 * before_ratio.max(1.0));

        for (a, b) in paths.iter().zip(&out) {
            let tags_a: Vec<bool> = a.iter().map(Waypoint::is_move).collect();
            let tags_b: Vec<bool> = b.iter().map(Waypoint::is_move).collect();
            prop_assert_eq!(tags_a, tags_b);
        }
    }

    #[test]
    fn normalizing_at_longest_side_is_idempotent(
        paths in prop::collection::vec(outline(), 1..4),
        target in 1.0f64..500.0,
    ) {
        let bounds = BoundingBox::from_paths(&paths).unwrap();
        prop_assume!(bounds.width() > 1e-6 && bounds.height() > 1e-6);

        let once = normalize(&paths, target);
        let twice = normalize(&once, target);
        for (a, b) in once.iter().zip(&twice) {
            for (p, q) in a.iter().zip(b.iter()) {
                prop_assert!(p.point().distance_to(&q.point()) < 1e-9 * target);
            }
        }
    }
}
