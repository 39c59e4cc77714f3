#[derive(Clone, Debug)]
pub struct RequestContext {
    pub user_id: i32,
}
