//! HMAC-SHA256 request signing for Binance USD-M futures.

use crate::credentials::ApiCredentials;
use crate::error::AuthError;
use common::QueryParams;
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Parameters the signer adds itself and callers may not supply.
const RESERVED_PARAMS: [&str; 2] = ["timestamp", "signature"];

/// Request signer for authenticated Binance API calls.
pub struct RequestSigner<'a> {
    credentials: &'a ApiCredentials,
    recv_window_ms: u64,
}

impl<'a> RequestSigner<'a> {
    /// Create a new request signer.
    ///
    /// `recv_window_ms` is sent as `recvWindow` whenever the caller's
    /// parameters do not carry one.
    pub fn new(credentials: &'a ApiCredentials, recv_window_ms: u64) -> Self {
        Self {
            credentials,
            recv_window_ms,
        }
    }

    /// Sign a message and return the hex-encoded signature.
    ///
    /// This computes HMAC-SHA256 of the message using the secret key
    /// and returns the result as a lowercase hex string.
    pub fn sign(&self, message: &str) -> String {
        let mut mac = HmacSha256::new_from_slice(self.credentials.expose_secret().as_bytes())
            .expect("HMAC can take key of any size");

        mac.update(message.as_bytes());
        let result = mac.finalize();
        hex::encode(result.into_bytes())
    }

    /// Build a signed query string from parameters.
    ///
    /// This method:
    /// 1. Rejects caller-supplied `timestamp` or `signature`
    /// 2. Appends `timestamp`, then `recvWindow` unless already present
    /// 3. Form-urlencodes every pair in insertion order
    /// 4. Signs that exact string and appends `&signature=<hex>`
    ///
    /// The result is sent verbatim as the HTTP query string.
    ///
    /// # Errors
    /// Returns `AuthError::ReservedParameter` for a reserved name.
    pub fn sign_params(
        &self,
        params: &QueryParams,
        timestamp_ms: i64,
    ) -> Result<String, AuthError> {
        if let Some(reserved) = RESERVED_PARAMS.iter().find(|name| params.contains(name)) {
            return Err(AuthError::ReservedParameter((*reserved).to_string()));
        }

        let mut all_params = params.clone();
        all_params.push("timestamp", timestamp_ms);
        if !all_params.contains("recvWindow") {
            all_params.push("recvWindow", self.recv_window_ms);
        }

        let query_string = all_params.to_query_string();
        let signature = self.sign(&query_string);
        Ok(format!("{}&signature={}", query_string, signature))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_creds() -> ApiCredentials {
        ApiCredentials::new("key".into(), "secret".into())
    }

    fn split_signature(signed: &str) -> (&str, &str) {
        let pos = signed.rfind("&signature=").unwrap();
        (&signed[..pos], &signed[pos + "&signature=".len()..])
    }

    #[test]
    fn test_sign_known_vector() {
        // https://binance-docs.github.io/apidocs/spot/en/#signed-trade-and-user_data-endpoint-security
        let creds = ApiCredentials::new(
            "vmPUZE6mv9SD5VNHk4HlWFsOr6aKE2zvsw0MuIgwCIPy6utIco14y7Ju91duEh8A".into(),
            "NhqPtmdSJYdKjVHjA7PZj4Mge3R5YNiP1e3UZjInClVN65XAbvqqM6A7H5fATj0j".into(),
        );

        let signer = RequestSigner::new(&creds, 5000);

        let query = "symbol=LTCBTC&side=BUY&type=LIMIT&timeInForce=GTC&quantity=1&price=0.1&recvWindow=5000&timestamp=1499827319559";
        let signature = signer.sign(query);

        assert_eq!(
            signature,
            "c8db56825ae71d6d79447849e617115f4a920fa2acdcab2b053c4b2838bd6b71"
        );
    }

    #[test]
    fn test_sign_params_reproduces_known_vector() {
        let creds = ApiCredentials::new(
            "vmPUZE6mv9SD5VNHk4HlWFsOr6aKE2zvsw0MuIgwCIPy6utIco14y7Ju91duEh8A".into(),
            "NhqPtmdSJYdKjVHjA7PZj4Mge3R5YNiP1e3UZjInClVN65XAbvqqM6A7H5fATj0j".into(),
        );
        let signer = RequestSigner::new(&creds, 60_000);

        let params = QueryParams::new()
            .with("symbol", "LTCBTC")
            .with("side", "BUY")
            .with("type", "LIMIT")
            .with("timeInForce", "GTC")
            .with("quantity", 1)
            .with("price", "0.1")
            .with("recvWindow", 5000);

        let signed = signer.sign_params(&params, 1499827319559).unwrap();

        assert_eq!(
            signed,
            "symbol=LTCBTC&side=BUY&type=LIMIT&timeInForce=GTC&quantity=1&price=0.1\
             &recvWindow=5000&timestamp=1499827319559\
             &signature=c8db56825ae71d6d79447849e617115f4a920fa2acdcab2b053c4b2838bd6b71"
        );
    }

    #[test]
    fn test_sign_params_adds_timestamp_and_default_recv_window() {
        let creds = test_creds();
        let signer = RequestSigner::new(&creds, 5000);

        let params = QueryParams::new().with("symbol", "BTCUSDT");
        let signed = signer.sign_params(&params, 1000).unwrap();
        let (query, _) = split_signature(&signed);

        assert_eq!(query, "symbol=BTCUSDT&timestamp=1000&recvWindow=5000");
    }

    #[test]
    fn test_sign_params_uses_configured_recv_window() {
        let creds = test_creds();
        let signer = RequestSigner::new(&creds, 7000);

        let params = QueryParams::new().with("symbol", "BTCUSDT");
        let signed = signer.sign_params(&params, 1000).unwrap();
        let (query, signature) = split_signature(&signed);

        assert_eq!(query, "symbol=BTCUSDT&timestamp=1000&recvWindow=7000");
        assert_eq!(signature, signer.sign(query));
    }

    #[test]
    fn test_sign_params_keeps_caller_recv_window() {
        let creds = test_creds();
        let signer = RequestSigner::new(&creds, 5000);

        let params = QueryParams::new()
            .with("recvWindow", 2500)
            .with("symbol", "ETHUSDT");
        let signed = signer.sign_params(&params, 1000).unwrap();
        let (query, _) = split_signature(&signed);

        assert_eq!(query, "recvWindow=2500&symbol=ETHUSDT&timestamp=1000");
    }

    #[test]
    fn test_sign_params_preserves_order() {
        let creds = test_creds();
        let signer = RequestSigner::new(&creds, 5000);

        let params = QueryParams::new().with("zebra", 1).with("alpha", 2);
        let signed = signer.sign_params(&params, 1000).unwrap();

        assert!(signed.starts_with("zebra=1&alpha=2&timestamp=1000"));
    }

    #[test]
    fn test_signature_is_last_and_matches_hmac_of_query() {
        let creds = test_creds();
        let signer = RequestSigner::new(&creds, 5000);

        let params = QueryParams::new().with("symbol", "BTCUSDT");
        let signed = signer.sign_params(&params, 1_700_000_000_000).unwrap();
        let (query, signature) = split_signature(&signed);

        assert!(!signature.contains('&'));
        assert_eq!(signature.len(), 64);
        assert!(signature
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
        assert_eq!(signature, signer.sign(query));
    }

    #[test]
    fn test_sign_params_is_deterministic() {
        let creds = test_creds();
        let signer = RequestSigner::new(&creds, 5000);

        let params = QueryParams::new().with("symbol", "BTCUSDT").with("limit", 5);
        let first = signer.sign_params(&params, 42).unwrap();
        let second = signer.sign_params(&params, 42).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_value_or_position_change_alters_signature() {
        let creds = test_creds();
        let signer = RequestSigner::new(&creds, 5000);

        let base = QueryParams::new().with("a", 1).with("b", 2);
        let changed_value = QueryParams::new().with("a", 1).with("b", 3);
        let swapped = QueryParams::new().with("b", 2).with("a", 1);

        let sig = |p: &QueryParams| {
            let signed = signer.sign_params(p, 1000).unwrap();
            split_signature(&signed).1.to_string()
        };

        assert_ne!(sig(&base), sig(&changed_value));
        assert_ne!(sig(&base), sig(&swapped));
        assert_ne!(
            signer.sign_params(&base, 1000).unwrap(),
            signer.sign_params(&base, 1001).unwrap()
        );
    }

    #[test]
    fn test_secret_changes_signature() {
        let creds_a = ApiCredentials::new("key".into(), "secret-a".into());
        let creds_b = ApiCredentials::new("key".into(), "secret-b".into());

        assert_ne!(
            RequestSigner::new(&creds_a, 5000).sign("symbol=BTCUSDT"),
            RequestSigner::new(&creds_b, 5000).sign("symbol=BTCUSDT")
        );
    }

    #[test]
    fn test_list_values_are_repeated_and_encoded() {
        let creds = test_creds();
        let signer = RequestSigner::new(&creds, 5000);

        let mut params = QueryParams::new();
        params.push_all("symbol", ["BTC USDT", "ETH/USDT"]);
        let signed = signer.sign_params(&params, 1000).unwrap();
        let (query, signature) = split_signature(&signed);

        assert_eq!(
            query,
            "symbol=BTC+USDT&symbol=ETH%2FUSDT&timestamp=1000&recvWindow=5000"
        );
        assert_eq!(signature, signer.sign(query));
    }

    #[test]
    fn test_reserved_parameters_rejected() {
        let creds = test_creds();
        let signer = RequestSigner::new(&creds, 5000);

        let with_timestamp = QueryParams::new().with("timestamp", 1);
        assert_eq!(
            signer.sign_params(&with_timestamp, 1000),
            Err(AuthError::ReservedParameter("timestamp".into()))
        );

        let with_signature = QueryParams::new()
            .with("symbol", "BTCUSDT")
            .with("signature", "abc");
        assert_eq!(
            signer.sign_params(&with_signature, 1000),
            Err(AuthError::ReservedParameter("signature".into()))
        );
    }

    #[test]
    fn test_sign_empty_message() {
        let creds = test_creds();
        let signer = RequestSigner::new(&creds, 5000);

        // Should not panic on empty message
        let signature = signer.sign("");
        assert_eq!(signature.len(), 64);
    }
}
