use lokal_reflect::LocalizedResource;

#[derive(Default, LocalizedResource)]
pub struct CommonTexts {
    #[localized(translate_me)]
    pub ok: String,
}

fn main() {}
