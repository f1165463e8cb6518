mod routing_client;
