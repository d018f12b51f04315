pub struct HexArgs {
    pub text: String,
}

pub struct TagArgs {
    pub with_run: bool,
}

pub struct StatArgs {
    pub body: String,
    pub with_run: bool,
}

pub struct FieldArgs {
    pub name: String,
    pub value: String,
}

pub struct NowArgs {
    pub iso: bool,
}
