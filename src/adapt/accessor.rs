//! Getter/setter pairs.
//!
//! An [`Accessor`] bundles a getter and an in-place setter for one part of a
//! structure, so the pair can be passed around, composed and turned into
//! plain closures.
//!
//! # Laws
//!
//! A well-formed accessor satisfies, for any `source` and `value`:
//!
//! 1. **`SetGet`**: after `accessor.set(&mut source, value.clone())`,
//!    `accessor.get(&source) == value`
//! 2. **`GetSet`**: `accessor.set(&mut source, accessor.get(&source))` leaves
//!    `source` unchanged
//! 3. **`SetSet`**: setting twice is the same as setting the second value

use std::fmt;
use std::marker::PhantomData;

/// A getter and an in-place setter for a part `A` of a structure `S`.
///
/// # Type Parameters
///
/// - `S`: The source type (the whole structure)
/// - `A`: The focused part
/// - `G`: The getter function type
/// - `St`: The setter function type
///
/// # Examples
///
/// ```rust
/// use fnkit::adapt::Accessor;
///
/// #[derive(Debug, PartialEq)]
/// struct Account { owner: String, balance: i64 }
///
/// let balance = Accessor::new(
///     |account: &Account| account.balance,
///     |account: &mut Account, balance| account.balance = balance,
/// );
///
/// let mut account = Account { owner: "ada".into(), balance: 10 };
/// balance.modify(&mut account, |current| current + 5);
/// assert_eq!(balance.get(&account), 15);
/// ```
pub struct Accessor<S, A, G, St> {
    getter: G,
    setter: St,
    _marker: PhantomData<(S, A)>,
}

impl<S, A, G, St> Accessor<S, A, G, St>
where
    G: Fn(&S) -> A,
    St: Fn(&mut S, A),
{
    /// Pairs `getter` with `setter`.
    #[must_use]
    pub const fn new(getter: G, setter: St) -> Self {
        Self {
            getter,
            setter,
            _marker: PhantomData,
        }
    }

    /// Reads the focused part.
    #[inline]
    pub fn get(&self, source: &S) -> A {
        (self.getter)(source)
    }

    /// Overwrites the focused part.
    #[inline]
    pub fn set(&self, source: &mut S, value: A) {
        (self.setter)(source, value);
    }

    /// Replaces the focused part with `function` applied to its current value.
    pub fn modify<F>(&self, source: &mut S, function: F)
    where
        F: FnOnce(A) -> A,
    {
        let updated = function(self.get(source));
        self.set(source, updated);
    }

    /// Focuses further into the part with `inner`.
    ///
    /// The composed setter reads the outer part, updates it with `inner`,
    /// and writes it back.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::adapt::Accessor;
    ///
    /// #[derive(Clone, Copy, Debug, PartialEq)]
    /// struct Point { x: i32, y: i32 }
    /// struct Segment { start: Point, end: Point }
    ///
    /// let start = Accessor::new(
    ///     |segment: &Segment| segment.start,
    ///     |segment: &mut Segment, start| segment.start = start,
    /// );
    /// let x = Accessor::new(|point: &Point| point.x, |point: &mut Point, x| point.x = x);
    ///
    /// let start_x = start.then(x);
    /// let mut segment = Segment { start: Point { x: 0, y: 0 }, end: Point { x: 5, y: 5 } };
    /// start_x.set(&mut segment, 3);
    /// assert_eq!(segment.start, Point { x: 3, y: 0 });
    /// assert_eq!(start_x.get(&segment), 3);
    /// ```
    pub fn then<B, InnerGetter, InnerSetter>(
        self,
        inner: Accessor<A, B, InnerGetter, InnerSetter>,
    ) -> Accessor<S, B, impl Fn(&S) -> B, impl Fn(&mut S, B)>
    where
        G: Clone,
        InnerGetter: Fn(&A) -> B,
        InnerSetter: Fn(&mut A, B),
    {
        let Self {
            getter: part_of,
            setter: store_part,
            ..
        } = self;
        let Accessor {
            getter: leaf_of,
            setter: store_leaf,
            ..
        } = inner;
        let locate = part_of.clone();

        Accessor::new(
            move |source: &S| leaf_of(&locate(source)),
            move |source: &mut S, value: B| {
                let mut part = part_of(&*source);
                store_leaf(&mut part, value);
                store_part(source, part);
            },
        )
    }

    /// Binds `value` to the setter, yielding a consumer of sources.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::adapt::Accessor;
    ///
    /// let first = Accessor::new(
    ///     |pair: &(i32, i32)| pair.0,
    ///     |pair: &mut (i32, i32), first| pair.0 = first,
    /// );
    /// let mut pairs = vec![(1, 1), (2, 2)];
    /// pairs.iter_mut().for_each(first.setter_with(0));
    /// assert_eq!(pairs, vec![(0, 1), (0, 2)]);
    /// ```
    pub fn setter_with(&self, value: A) -> impl Fn(&mut S) + '_
    where
        A: Clone,
    {
        move |source| (self.setter)(source, value.clone())
    }

    /// Returns the getter as a plain closure.
    pub fn getter(&self) -> impl Fn(&S) -> A + '_ {
        move |source| (self.getter)(source)
    }
}

impl<S, A, G, St> fmt::Debug for Accessor<S, A, G, St> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Accessor")
            .field("getter", &"<fn>")
            .field("setter", &"<fn>")
            .finish()
    }
}

impl<S, A, G: Clone, St: Clone> Clone for Accessor<S, A, G, St> {
    fn clone(&self) -> Self {
        Self {
            getter: self.getter.clone(),
            setter: self.setter.clone(),
            _marker: PhantomData,
        }
    }
}
