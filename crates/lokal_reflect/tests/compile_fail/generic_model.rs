use lokal_reflect::LocalizedModel;

#[derive(Default, LocalizedModel)]
/// Descriptors are built once per type, so generic parameters are rejected.
pub struct Wrapper<T> {
    pub inner: T,
}

fn main() {}
