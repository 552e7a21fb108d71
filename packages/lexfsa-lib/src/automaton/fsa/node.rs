/// A state in an FSA. States carry no behavior of their own, all operations
/// live on [`Fsa`](super::Fsa); the node weight only records whether the
/// state is accepting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FsaNode {
    pub accepting: bool,
}

impl FsaNode {
    pub fn accepting() -> Self {
        FsaNode { accepting: true }
    }

    pub fn non_accepting() -> Self {
        FsaNode { accepting: false }
    }
}
