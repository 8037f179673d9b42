/// One link of the chain. Each node exclusively owns its successor.
#[derive(Debug)]
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) next: Link<T>,
}

pub(crate) type Link<T> = Option<Box<Node<T>>>;

impl<T> Node<T> {
    pub(crate) fn new(value: T) -> Box<Self> {
        Box::new(Self { value, next: None })
    }
}
