use lokal_reflect::{Describe, LocalizedModel};

#[derive(Default, Describe)]
pub struct Named {
    pub name: String,
}

#[derive(Default, Describe)]
pub struct Dated {
    pub date: String,
}

#[derive(Default, LocalizedModel)]
/// A type has at most one base.
pub struct Record {
    #[localized(base)]
    pub named: Named,
    #[localized(base)]
    pub dated: Dated,
}

fn main() {}
