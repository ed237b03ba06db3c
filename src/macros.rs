/// A macro to build an activation by name.
///
/// # Examples
///
/// ```
/// use athena_activations::activation;
/// let relu = activation!("relu").unwrap();
/// let softmax = activation!("softmax", { "temperature": 1.0 }).unwrap();
/// assert_eq!(softmax.kwargs()["temperature"], 1.0);
/// ```
///
/// The first form builds `relu` with no kwargs. The second collects the given
/// keys and JSON values into the kwargs forwarded to the constructor.
#[macro_export]
macro_rules! activation {
    ($spec:expr) => {
        $crate::activations::build($spec, $crate::activations::Kwargs::new())
    };
    ($spec:expr, { $( $key:literal : $value:expr ),* $(,)? }) => {
        {
            #[allow(unused_mut)]
            let mut kwargs = $crate::activations::Kwargs::new();
            $( kwargs.insert($key.to_string(), $crate::__private::serde_json::Value::from($value)); )*
            $crate::activations::build($spec, kwargs)
        }
    };
}
