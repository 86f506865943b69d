extern crate std;

use soroban_sdk::{
    symbol_short,
    testutils::{Address as _, Events, Ledger},
    vec, Address, Bytes, BytesN, Env, IntoVal, String, TryIntoVal, Vec,
};

use crate::events::{TransferSingle, Voted};
use crate::test_tickets::{ISSUED, ISSUER};
use crate::{Campaign, CampaignClient};

fn setup() -> (Env, CampaignClient<'static>, Address) {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().set_timestamp(1_700_000_000);
    let contract_id = env.register(Campaign, ());
    let client = CampaignClient::new(&env, &contract_id);
    let owner = Address::generate(&env);
    client.init(
        &owner,
        &BytesN::from_array(&env, &ISSUER),
        &String::from_str(&env, "https://api.metazons.com/metadata"),
        &String::from_str(&env, "https://api.metazons.com/metadata/contract"),
        &54,
        &123,
        &5_643_587_200,
    );
    (env, client, owner)
}

#[test]
fn test_vote_emits_transfer_then_voted() {
    let (env, client, _owner) = setup();
    let voter = Address::generate(&env);
    let ticket = &ISSUED[0];
    let selected: Vec<u32> = vec![&env, 0, 1, 2];

    // read-only call so the event log only grows by what `vote` publishes
    assert!(!client.is_voted(&voter));
    let before = env.events().all().len();

    client.vote(
        &voter,
        &selected,
        &Bytes::from_slice(&env, b"Hello world!"),
        &ticket.message(&env),
        &ticket.signature(&env),
    );

    let all_events = env.events().all();
    assert_eq!(all_events.len() - before, 2);

    // Topic: (symbol_short!("transfer"), token_id)
    let transfer = all_events.get(all_events.len() - 2).expect("transfer event missing");
    assert_eq!(transfer.0, client.address);
    assert_eq!(
        transfer.1,
        vec![&env, symbol_short!("transfer").into_val(&env), 0u32.into_val(&env)]
    );
    let transfer_data: TransferSingle = transfer.2.try_into_val(&env).unwrap();
    assert_eq!(
        transfer_data,
        TransferSingle {
            operator: voter.clone(),
            from: None,
            to: voter.clone(),
            token_id: 0,
            amount: 1,
        }
    );

    // Topic: (symbol_short!("voted"), voter)
    let voted = all_events.last().expect("voted event missing");
    assert_eq!(voted.0, client.address);
    assert_eq!(
        voted.1,
        vec![&env, symbol_short!("voted").into_val(&env), voter.into_val(&env)]
    );
    let voted_data: Voted = voted.2.try_into_val(&env).unwrap();
    assert_eq!(
        voted_data,
        Voted {
            candidate_ids: selected,
            voter: voter.clone(),
            token_id: 0,
            ticket_hash: ticket.hash(&env),
        }
    );
}

#[test]
fn test_p_vote_events_name_owner_as_operator() {
    let (env, client, owner) = setup();
    let voter = Address::generate(&env);
    let selected: Vec<u32> = vec![&env, 0, 1, 2];

    assert!(!client.is_voted(&voter));
    let before = env.events().all().len();

    client.p_vote(&owner, &selected, &voter, &BytesN::from_array(&env, &[0u8; 32]));

    let all_events = env.events().all();
    assert_eq!(all_events.len() - before, 2);

    let transfer = all_events.get(all_events.len() - 2).expect("transfer event missing");
    let transfer_data: TransferSingle = transfer.2.try_into_val(&env).unwrap();
    assert_eq!(transfer_data.operator, owner);
    assert_eq!(transfer_data.from, None);
    assert_eq!(transfer_data.to, voter);
    assert_eq!(transfer_data.token_id, 0);

    let voted = all_events.last().expect("voted event missing");
    let voted_data: Voted = voted.2.try_into_val(&env).unwrap();
    assert_eq!(voted_data.candidate_ids, selected);
    assert_eq!(voted_data.voter, voter);
    assert_eq!(voted_data.ticket_hash, BytesN::from_array(&env, &[0u8; 32]));
}

#[test]
fn test_set_uri_event() {
    let (env, client, owner) = setup();
    let uri = String::from_str(&env, "newUri");

    client.set_uri(&owner, &uri);

    let last_event = env.events().all().last().expect("No events found");
    assert_eq!(last_event.0, client.address);
    assert_eq!(
        last_event.1,
        vec![&env, symbol_short!("set_uri").into_val(&env)]
    );
    let data: String = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(data, uri);
}

#[test]
fn test_set_end_date_event() {
    let (env, client, owner) = setup();

    client.set_end_date(&owner, &123_456_789);

    let last_event = env.events().all().last().expect("No events found");
    assert_eq!(
        last_event.1,
        vec![&env, symbol_short!("set_end").into_val(&env)]
    );
    let data: u64 = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(data, 123_456_789);
}

#[test]
fn test_set_contract_uri_event() {
    let (env, client, owner) = setup();
    let uri = String::from_str(&env, "newContractUri");

    client.set_contract_uri(&owner, &uri);

    let last_event = env.events().all().last().expect("No events found");
    assert_eq!(
        last_event.1,
        vec![&env, symbol_short!("set_curi").into_val(&env)]
    );
    let data: String = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(data, uri);
}

#[test]
fn test_transfer_ownership_event() {
    let (env, client, owner) = setup();
    let new_owner = Address::generate(&env);

    client.transfer_ownership(&owner, &new_owner);

    let last_event = env.events().all().last().expect("No events found");
    assert_eq!(
        last_event.1,
        vec![&env, symbol_short!("owner").into_val(&env)]
    );
    let data: (Address, Address) = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(data, (owner, new_owner));
}

#[test]
fn test_rejected_vote_emits_nothing() {
    let (env, client, _owner) = setup();
    let voter = Address::generate(&env);

    assert!(!client.is_voted(&voter));
    let before = env.events().all().len();

    let result = client.try_vote(
        &voter,
        &vec![&env, 2u32, 1],
        &Bytes::new(&env),
        &ISSUED[0].message(&env),
        &ISSUED[0].signature(&env),
    );
    assert!(result.is_err());
    assert_eq!(env.events().all().len(), before);
}
