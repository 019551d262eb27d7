pub fn markdown_fixture() -> &'static str {
    return r#"
Under the Civil Code of the Republic of Armenia, a residential lease must be concluded in writing.

Key requirements:
- The parties and the address of the premises
- The rent and how it is paid
* The term of the lease

To terminate early, the tenant should:
1. Notify the landlord in writing
2. Give at least three months notice
3. Settle any outstanding rent

```text
Article 611. Form of the residential lease contract
```

Please consult a licensed lawyer for advice on your specific case.
"#
    .trim();
}

pub fn chat_response_fixture() -> &'static str {
    return r#"{
  "responseText": "A lease must be concluded in writing.\n\n- Parties\n- Rent",
  "citations": ["Armenian Civil Code, Article 123", "Law on Legal Acts, Section 4"],
  "newTitle": "Lease Q&A",
  "chatId": "chat_1700000000000"
}"#;
}
