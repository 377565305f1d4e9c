use proptest::prelude::*;
use yardcalc::evaluate;

/// A flat chain `n op n op n ...` without parentheses.
#[derive(Debug, Clone)]
struct Chain {
    numbers:   Vec<u8>,
    operators: Vec<char>,
}

impl Chain {
    fn render(&self, spacing: &str) -> String {
        let mut text = self.numbers[0].to_string();
        for (op, n) in self.operators.iter().zip(&self.numbers[1..]) {
            text.push_str(spacing);
            text.push(*op);
            text.push_str(spacing);
            text.push_str(&n.to_string());
        }
        text
    }

    /// Evaluates the chain left to right as a sum of products.
    fn reference(&self) -> f64 {
        let mut total = 0.0;
        let mut sign = 1.0;
        let mut term = f64::from(self.numbers[0]);

        for (op, n) in self.operators.iter().zip(&self.numbers[1..]) {
            let n = f64::from(*n);
            match op {
                '*' => term *= n,
                '/' => term /= n,
                _ => {
                    total += sign * term;
                    sign = if *op == '+' { 1.0 } else { -1.0 };
                    term = n;
                },
            }
        }

        total + sign * term
    }
}

fn chain() -> impl Strategy<Value = Chain> {
    (1..8_usize).prop_flat_map(|len| {
                    (prop::collection::vec(1..=9_u8, len + 1),
                     prop::collection::vec(prop::sample::select(vec!['+', '-', '*', '/']), len))
                })
                .prop_map(|(numbers, operators)| Chain { numbers, operators })
}

/// A parenthesized integer expression using `+ - *`.
#[derive(Debug, Clone)]
enum Tree {
    Leaf(u8),
    Node(Box<Tree>, char, Box<Tree>),
}

impl Tree {
    fn render(&self) -> String {
        match self {
            Self::Leaf(n) => n.to_string(),
            Self::Node(left, op, right) => format!("({}{op}{})", left.render(), right.render()),
        }
    }

    fn value(&self) -> i64 {
        match self {
            Self::Leaf(n) => i64::from(*n),
            Self::Node(left, op, right) => {
                let (l, r) = (left.value(), right.value());
                match op {
                    '+' => l + r,
                    '-' => l - r,
                    _ => l * r,
                }
            },
        }
    }
}

fn tree() -> impl Strategy<Value = Tree> {
    (0..=9_u8).prop_map(Tree::Leaf).prop_recursive(4, 16, 2, |inner| {
        (inner.clone(), prop::sample::select(vec!['+', '-', '*']), inner)
            .prop_map(|(left, op, right)| Tree::Node(Box::new(left), op, Box::new(right)))
    })
}

proptest! {
    #[test]
    fn chains_follow_standard_precedence(chain in chain()) {
        let expected = chain.reference();
        let actual = evaluate(&chain.render("")).unwrap();
        prop_assert_eq!(actual.to_bits(), expected.to_bits(),
                        "{} gave {}, expected {}", chain.render(""), actual, expected);
    }

    #[test]
    fn whitespace_does_not_change_the_result(chain in chain()) {
        prop_assert_eq!(evaluate(&chain.render("")).unwrap(),
                        evaluate(&chain.render("  ")).unwrap());
    }

    #[test]
    fn parenthesized_integer_trees_are_exact(tree in tree()) {
        #[allow(clippy::cast_precision_loss)]
        let expected = tree.value() as f64;
        prop_assert_eq!(evaluate(&tree.render()).unwrap(), expected);
    }

    #[test]
    fn results_round_trip_through_text(x in -1e15_f64..1e15) {
        prop_assert_eq!(evaluate(&x.to_string()).unwrap(), x);
    }
}
