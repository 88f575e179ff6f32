use lokal_reflect::LocalizedResource;

#[derive(Default, LocalizedResource)]
#[localized(only_included)]
/// Member filtering only applies to models.
pub struct CommonTexts {
    pub ok: String,
}

fn main() {}
