//! Serde support: a tree serializes as an ascending sequence.

use super::RedBlackTree;

impl<T> serde::Serialize for RedBlackTree<T>
where
    T: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self)
    }
}

struct RedBlackTreeVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

impl<T> RedBlackTreeVisitor<T> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

impl<'de, T> serde::de::Visitor<'de> for RedBlackTreeVisitor<T>
where
    T: serde::Deserialize<'de> + Clone + Ord,
{
    type Value = RedBlackTree<T>;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        // Duplicates collapse into one element, as with any other insertion.
        let mut tree = RedBlackTree::new();
        while let Some(element) = access.next_element()? {
            tree.insert_in_place(element);
        }
        Ok(tree)
    }
}

impl<'de, T> serde::Deserialize<'de> for RedBlackTree<T>
where
    T: serde::Deserialize<'de> + Clone + Ord,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(RedBlackTreeVisitor::new())
    }
}
