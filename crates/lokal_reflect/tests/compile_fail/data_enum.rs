use lokal_reflect::Describe;

#[derive(Describe)]
/// Only fieldless enums describe their variants.
pub enum Shape {
    Circle(f64),
    Square { side: f64 },
}

fn main() {}
