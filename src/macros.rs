/// Builds a [`Doctree`](crate::Doctree) from a nested literal shape.
///
/// Elements are bare tag names, attributes sit in `{ .. }`, children in
/// `[ .. ]`, and string literals become text leaves:
///
/// ```
/// use doctree_rst::doctree;
///
/// let tree = doctree!(document [
///     section [
///         title [ "Intro" ],
///         paragraph [ "Hello ", strong [ "world" ], "." ],
///     ],
/// ]);
/// assert_eq!(tree.node_count(), 9);
/// ```
#[macro_export]
macro_rules! doctree {
    // Root with attributes and children
    ($root:ident { $($attrs:tt)* } [ $($children:tt)* ]) => {{
        let mut tree = $crate::Doctree::with_root(stringify!($root));
        let root = tree.root();
        $crate::doctree!(@attrs tree, root, $($attrs)*);
        $crate::doctree!(@children tree, root, $($children)*);
        tree
    }};

    // Root with attributes
    ($root:ident { $($attrs:tt)* }) => {{
        let mut tree = $crate::Doctree::with_root(stringify!($root));
        let root = tree.root();
        $crate::doctree!(@attrs tree, root, $($attrs)*);
        tree
    }};

    // Root with children
    ($root:ident [ $($children:tt)* ]) => {{
        let mut tree = $crate::Doctree::with_root(stringify!($root));
        let root = tree.root();
        $crate::doctree!(@children tree, root, $($children)*);
        tree
    }};

    // Bare root
    ($root:ident) => {
        $crate::Doctree::with_root(stringify!($root))
    };

    // No more children
    (@children $tree:ident, $parent:ident $(,)?) => {};

    // Text leaf
    (@children $tree:ident, $parent:ident, $text:literal $(, $($rest:tt)*)?) => {
        $tree.add_text($parent, $text);
        $crate::doctree!(@children $tree, $parent, $($($rest)*)?);
    };

    // Element with attributes and children
    (@children $tree:ident, $parent:ident,
     $tag:ident { $($attrs:tt)* } [ $($kids:tt)* ] $(, $($rest:tt)*)?) => {
        {
            let child = $tree.add_element($parent, stringify!($tag));
            $crate::doctree!(@attrs $tree, child, $($attrs)*);
            $crate::doctree!(@children $tree, child, $($kids)*);
        }
        $crate::doctree!(@children $tree, $parent, $($($rest)*)?);
    };

    // Element with attributes
    (@children $tree:ident, $parent:ident,
     $tag:ident { $($attrs:tt)* } $(, $($rest:tt)*)?) => {
        {
            let child = $tree.add_element($parent, stringify!($tag));
            $crate::doctree!(@attrs $tree, child, $($attrs)*);
        }
        $crate::doctree!(@children $tree, $parent, $($($rest)*)?);
    };

    // Element with children
    (@children $tree:ident, $parent:ident,
     $tag:ident [ $($kids:tt)* ] $(, $($rest:tt)*)?) => {
        {
            let child = $tree.add_element($parent, stringify!($tag));
            $crate::doctree!(@children $tree, child, $($kids)*);
        }
        $crate::doctree!(@children $tree, $parent, $($($rest)*)?);
    };

    // Bare element
    (@children $tree:ident, $parent:ident, $tag:ident $(, $($rest:tt)*)?) => {
        $tree.add_element($parent, stringify!($tag));
        $crate::doctree!(@children $tree, $parent, $($($rest)*)?);
    };

    // No more attributes
    (@attrs $tree:ident, $id:ident $(,)?) => {};

    // String-list attribute value
    (@attrs $tree:ident, $id:ident,
     $key:literal : [ $($item:literal),* $(,)? ] $(, $($rest:tt)*)?) => {
        $tree.set_attr($id, $key, vec![$(($item).to_string()),*]);
        $crate::doctree!(@attrs $tree, $id, $($($rest)*)?);
    };

    // Scalar attribute value
    (@attrs $tree:ident, $id:ident, $key:literal : $value:expr $(, $($rest:tt)*)?) => {
        $tree.set_attr($id, $key, $value);
        $crate::doctree!(@attrs $tree, $id, $($($rest)*)?);
    };
}
