use lokal_reflect::Describe;

#[derive(Default, Describe)]
/// Members need names to build keys from.
pub struct Pair(pub String, pub String);

fn main() {}
