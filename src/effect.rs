#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Effect {
  OpenUrl { url: String },
}
