//! Conversion of models into their wire representation

use serde::Serialize;

/// A model that can be sent to a client.
///
/// `to_transport` returns the value that is serialized into the response
/// body. Sequences convert element-wise.
pub trait ToTransport {
    type Transport: Serialize;

    fn to_transport(&self) -> Self::Transport;
}

impl<T: ToTransport> ToTransport for [T] {
    type Transport = Vec<T::Transport>;

    fn to_transport(&self) -> Self::Transport {
        self.iter().map(ToTransport::to_transport).collect()
    }
}

impl<T: ToTransport> ToTransport for Vec<T> {
    type Transport = Vec<T::Transport>;

    fn to_transport(&self) -> Self::Transport {
        self.as_slice().to_transport()
    }
}

impl<T: ToTransport + ?Sized> ToTransport for &T {
    type Transport = T::Transport;

    fn to_transport(&self) -> Self::Transport {
        (**self).to_transport()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Doubled(u32);

    struct Number(u32);

    impl ToTransport for Number {
        type Transport = Doubled;

        fn to_transport(&self) -> Doubled {
            Doubled(self.0 * 2)
        }
    }

    #[test]
    fn test_single_value_converts() {
        let json = serde_json::to_value(Number(4).to_transport()).unwrap();
        assert_eq!(json, serde_json::json!(8));
    }

    #[test]
    fn test_sequence_converts_element_wise() {
        let numbers = vec![Number(1), Number(2), Number(3)];
        let json = serde_json::to_value(numbers.to_transport()).unwrap();
        assert_eq!(json, serde_json::json!([2, 4, 6]));
    }

    #[test]
    fn test_empty_sequence_is_empty_array() {
        let numbers: Vec<Number> = Vec::new();
        let json = serde_json::to_value(numbers.to_transport()).unwrap();
        assert_eq!(json, serde_json::json!([]));
    }
}
