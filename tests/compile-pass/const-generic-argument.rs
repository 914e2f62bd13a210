use static_switch::bool_switch;

struct Codec<const WIDE: bool> {
    lanes: usize,
}

impl<const WIDE: bool> Codec<WIDE> {
    fn new() -> Self {
        Self {
            lanes: if WIDE { 8 } else { 4 },
        }
    }
}

fn main() {
    let wide = std::env::args().count() > 1;
    let lanes = bool_switch!(wide, WIDE, Codec::<WIDE>::new().lanes);
    assert!(lanes == 4 || lanes == 8);
}
