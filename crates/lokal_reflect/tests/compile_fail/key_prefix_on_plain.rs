use lokal_reflect::Describe;

#[derive(Default, Describe)]
#[localized(key_prefix = "Address")]
/// A key prefix needs a resource or model marker.
pub struct Address {
    pub street: String,
}

fn main() {}
