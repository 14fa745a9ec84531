use sipwire::{decode, encode, Encode, Message};

fn via_hosts<'a>(msg: &Message<'a>) -> Vec<Option<&'a str>> {
    msg.via.iter().map(|via| via.host).collect()
}

#[test]
fn test_encode_invite() {
    let msg = decode(
        b"INVITE sip:bob@biloxi.example.com SIP/2.0\r\n\
          Content-Type: application/sdp\r\n\
          v: SIP/2.0/tcp client.atlanta.example.com:5060;branch=z9hG4bK74bf9;received=192.0.2.101\r\n\
          Max-Forwards: 70\r\n\
          f: Alice <sip:alice@atlanta.example.com>;tag=9fxced76sl\r\n\
          To: Bob <sip:bob@biloxi.example.com>\r\n\
          Call-ID: 3848276298220188511@atlanta.example.com\r\n\
          CSeq: 1 INVITE\r\n\
          Contact: <sip:alice@client.atlanta.example.com;transport=tcp>\r\n\
          Content-Length: 151\r\n\
          \r\n\
          v=0\r\n\
          o=alice 2890844526 2890844526 IN IP4 client.atlanta.example.com\r\n\
          s=-\r\n\
          c=IN IP4 192.0.2.101\r\n\
          t=0 0\r\n\
          m=audio 49172 RTP/AVP 0\r\n\
          a=rtpmap:0 PCMU/8000\r\n",
    );

    let body = "v=0\r\n\
        o=alice 2890844526 2890844526 IN IP4 client.atlanta.example.com\r\n\
        s=-\r\n\
        t=0 0\r\n\
        m=audio 49172 RTP/AVP 0\r\n\
        c=IN IP4 192.0.2.101\r\n\
        a=rtpmap:0 PCMU/8000\r\n";
    let expected = format!(
        "INVITE sip:bob@biloxi.example.com SIP/2.0\r\n\
         Via: SIP/2.0/TCP client.atlanta.example.com:5060;branch=z9hG4bK74bf9;received=192.0.2.101\r\n\
         From: \"Alice\" <sip:alice@atlanta.example.com>;tag=9fxced76sl\r\n\
         To: \"Bob\" <sip:bob@biloxi.example.com>\r\n\
         Contact: <sip:alice@client.atlanta.example.com;transport=tcp>\r\n\
         Call-ID: 3848276298220188511@atlanta.example.com\r\n\
         CSeq: 1 INVITE\r\n\
         Max-Forwards: 70\r\n\
         Content-Type: application/sdp\r\n\
         Content-Length: {}\r\n\
         \r\n\
         {body}",
        body.len()
    );

    assert_eq!(encode(&msg), expected.as_bytes());
    assert_eq!(msg.encode(), encode(&msg));
}

#[test]
fn test_order_is_kept() {
    let msg = decode(
        b"SIP/2.0 200 OK\r\n\
          Via: SIP/2.0/UDP first.example.com;branch=z9hG4bK1\r\n\
          Via: SIP/2.0/UDP second.example.com;branch=z9hG4bK2, SIP/2.0/UDP third.example.com;branch=z9hG4bK3\r\n\
          a=sendrecv\r\n\
          a=ptime:20\r\n\
          a=rtpmap:8 PCMA/8000\r\n",
    );
    let encoded = msg.to_string();
    let again = decode(encoded.as_bytes());

    assert_eq!(via_hosts(&msg), via_hosts(&again));
    assert_eq!(again.via.len(), 3);

    let sdp = again.sdp.unwrap();
    let categories: Vec<_> = sdp.attributes.iter().map(|attr| attr.category).collect();
    assert_eq!(categories, [Some("sendrecv"), Some("ptime"), Some("rtpmap")]);
    assert!(encoded.contains("a=sendrecv\r\na=ptime:20\r\na=rtpmap:8 PCMA/8000\r\n"));
}

#[test]
fn test_content_length_without_body() {
    let msg = decode(b"SIP/2.0 200 OK\r\nContent-Length: 42\r\n\r\n");
    let encoded = msg.to_string();

    assert!(encoded.ends_with("Content-Length: 0\r\n\r\n"));
}

#[test]
fn test_auth_and_allow() {
    let msg = decode(
        b"REGISTER sip:example.com SIP/2.0\r\n\
          Allow: INVITE,  ACK,BYE\r\n\
          Authorization: Digest nonce=\"n1\", username=\"bob\", realm=\"example.com\", qop=auth\r\n\
          X-Gamma-Public-IP: 198.51.100.7\r\n",
    );
    let encoded = msg.to_string();

    assert!(encoded.contains(
        "Authorization: Digest username=\"bob\", realm=\"example.com\", nonce=\"n1\", qop=auth\r\n\
         Allow: INVITE, ACK, BYE\r\n\
         X-Gamma-IP: 198.51.100.7\r\n"
    ));

    let again = decode(encoded.as_bytes());
    assert_eq!(again.authorization.username, msg.authorization.username);
    assert_eq!(again.authorization.nonce, msg.authorization.nonce);
    assert_eq!(again.authorization.qop, msg.authorization.qop);
    assert_eq!(again.gamma_ip, Some("198.51.100.7"));
}
